//! Column mapping configuration for CSV exports.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Logical fields a record is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    Title,
    Year,
    CitedBy,
    Authors,
    AuthorFullNames,
    AuthorsWithAffiliations,
    Affiliations,
    References,
    AuthorKeywords,
    IndexKeywords,
    SourceTitle,
    Abstract,
    DocumentType,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::Title,
        Field::Year,
        Field::CitedBy,
        Field::Authors,
        Field::AuthorFullNames,
        Field::AuthorsWithAffiliations,
        Field::Affiliations,
        Field::References,
        Field::AuthorKeywords,
        Field::IndexKeywords,
        Field::SourceTitle,
        Field::Abstract,
        Field::DocumentType,
    ];

    /// Human readable name, matching the usual Scopus column.
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Year => "Year",
            Field::CitedBy => "Cited by",
            Field::Authors => "Authors",
            Field::AuthorFullNames => "Author full names",
            Field::AuthorsWithAffiliations => "Authors with affiliations",
            Field::Affiliations => "Affiliations",
            Field::References => "References",
            Field::AuthorKeywords => "Author Keywords",
            Field::IndexKeywords => "Index Keywords",
            Field::SourceTitle => "Source title",
            Field::Abstract => "Abstract",
            Field::DocumentType => "Document Type",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Default column names for every field, most specific first.
const DEFAULT_HEADERS: &[(Field, &[&str])] = &[
    (Field::Title, &["Title", "Article Title", "Document Title"]),
    (Field::Year, &["Year", "Publication Year", "Year of Publication"]),
    (Field::CitedBy, &["Cited by", "Times Cited", "Citations"]),
    (Field::Authors, &["Authors", "Author"]),
    (Field::AuthorFullNames, &["Author full names"]),
    (Field::AuthorsWithAffiliations, &["Authors with affiliations"]),
    (Field::Affiliations, &["Affiliations"]),
    (Field::References, &["References", "Cited References"]),
    (Field::AuthorKeywords, &["Author Keywords", "Keywords"]),
    (Field::IndexKeywords, &["Index Keywords"]),
    (Field::SourceTitle, &["Source title", "Journal", "Publication Name"]),
    (Field::Abstract, &["Abstract"]),
    (Field::DocumentType, &["Document Type"]),
];

/// Configuration for CSV parsing with custom header mappings.
///
/// Each [`Field`] maps to an ordered list of acceptable column names. When a file
/// is read, the candidates are tried in order and the first one present in the
/// header row is used. Header comparison ignores surrounding whitespace and case.
///
/// # Examples
///
/// ```
/// use bibliostat::csv::{CsvConfig, Field};
///
/// let mut config = CsvConfig::new();
/// config
///     .set_header_mapping(Field::CitedBy, vec!["Citations (total)".to_string()])
///     .set_required([Field::Authors, Field::CitedBy])
///     .set_delimiter(b';');
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Candidate column names per field
    header_map: BTreeMap<Field, Vec<String>>,
    /// Fields that must resolve to a column
    required: BTreeSet<Field>,
    /// Delimiter to use for parsing the CSV
    delimiter: u8,
    /// Whether rows may have a different number of cells than the header
    flexible: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvConfig {
    /// Creates a configuration with the default mappings, a comma delimiter and
    /// `Authors` as the only required field.
    #[must_use]
    pub fn new() -> Self {
        let header_map = DEFAULT_HEADERS
            .iter()
            .map(|(field, aliases)| (*field, aliases.iter().map(|s| s.to_string()).collect()))
            .collect();
        Self {
            header_map,
            required: BTreeSet::from([Field::Authors]),
            delimiter: b',',
            flexible: false,
        }
    }

    /// Replaces the candidate column names of `field`.
    pub fn set_header_mapping(&mut self, field: Field, aliases: Vec<String>) -> &mut Self {
        self.header_map.insert(field, aliases);
        self
    }

    /// Replaces the set of required fields.
    pub fn set_required<I: IntoIterator<Item = Field>>(&mut self, fields: I) -> &mut Self {
        self.required = fields.into_iter().collect();
        self
    }

    /// Sets the delimiter character
    pub fn set_delimiter(&mut self, delimiter: u8) -> &mut Self {
        self.delimiter = delimiter;
        self
    }

    /// Allows rows whose length differs from the header row.
    pub fn set_flexible(&mut self, flexible: bool) -> &mut Self {
        self.flexible = flexible;
        self
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn flexible(&self) -> bool {
        self.flexible
    }

    pub fn is_required(&self, field: Field) -> bool {
        self.required.contains(&field)
    }

    /// Candidate column names of `field`, in the order they are tried.
    pub fn candidates(&self, field: Field) -> &[String] {
        self.header_map.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Position of the first candidate of `field` present in `headers`.
    pub fn find_column<S: AsRef<str>>(&self, field: Field, headers: &[S]) -> Option<usize> {
        self.candidates(field).iter().find_map(|candidate| {
            let candidate = candidate.trim();
            headers
                .iter()
                .position(|header| header.as_ref().trim().eq_ignore_ascii_case(candidate))
        })
    }
}
