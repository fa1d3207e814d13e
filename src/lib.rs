//! Bibliometric indicators and co-occurrence networks from bibliographic exports.
//!
//! `bibliostat` loads Scopus-style CSV exports and derives the descriptive statistics
//! usually reported in a bibliometric review: productivity per author, country, journal
//! and year, citation indices, collaboration measures, and pairwise relations between
//! authors, references, keywords and documents.
//!
//! # Pipeline
//!
//! - **Loader** ([`loader`], [`csv`], [`encoding`]): reads a delimited file into
//!   [`Record`]s, trying several text encodings and delimiters and resolving logical
//!   fields through ordered lists of acceptable column names.
//! - **Normalizer** ([`normalize`]): splits multi-valued cells into clean token lists.
//! - **Aggregator** ([`metrics`]): h-index, g-index, i10/i100/i200, Collaboration Index
//!   and Coefficient, per-entity tables, annual production and country production.
//! - **Relator** ([`relate`]): co-authorship, co-citation, co-word, keyword
//!   co-occurrence and bibliographic coupling.
//!
//! # Basic Usage
//!
//! ```rust
//! use bibliostat::{AuthorSource, Loader, metrics::BibliometricSummary, relate};
//!
//! let input = "\
//! Authors,Title,Year,Cited by,References
//! \"Smith, J.; Doe, A.\",Learning in VR,2021,12,Ref A; Ref B
//! \"Doe, A.\",Immersive classrooms,2022,3,Ref B; Ref C
//! ";
//!
//! let records = Loader::new().load_bytes(input.as_bytes()).unwrap();
//! let summary = BibliometricSummary::from_records(&records, AuthorSource::Authors);
//! assert_eq!(summary.total_publications, 2);
//! assert_eq!(summary.h_index, 2);
//!
//! let network = relate::co_authorship(&records, AuthorSource::Authors);
//! assert_eq!(network.weight(&"Doe, A.".into(), &"Smith, J.".into()), 1);
//! ```
//!
//! # Error Handling
//!
//! Loading failures are reported as [`DataSourceError`] wrapped in
//! [`BibliometricError`]. Malformed multi-valued cells are never fatal: they
//! normalize to empty lists.
//!
//! ```rust
//! use bibliostat::{BibliometricError, DataSourceError, Loader};
//!
//! let result = Loader::new().load_bytes(b"Title,Year\nA paper,2020\n");
//! match result {
//!     Err(BibliometricError::DataSource(DataSourceError::MissingColumn { field, .. })) => {
//!         eprintln!("missing column for {field}")
//!     }
//!     Err(e) => eprintln!("other error: {e}"),
//!     Ok(records) => println!("loaded {} records", records.len()),
//! }
//! ```

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub mod csv;
pub mod encoding;
mod error;
pub mod loader;
pub mod metrics;
pub mod normalize;
pub mod regex;
pub mod relate;

// Reexports
pub use csv::{CsvConfig, CsvParser, Field};
pub use encoding::TextEncoding;
pub use error::{BibliometricError, DataSourceError};
pub use loader::{Loader, LoaderConfig};
pub use normalize::{AffiliatedAuthor, Separator};

/// A specialized Result type for bibliometric operations.
pub type Result<T> = std::result::Result<T, BibliometricError>;

/// Name of an author, country, journal, keyword, reference or word.
pub type Entity = CompactString;

/// Which column an author list is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AuthorSource {
    /// The `Authors` column. Entries are separated by `;`, or by `, ` in older
    /// exports that have no semicolons.
    #[default]
    Authors,
    /// The `Author full names` column, `;` separated, with the author ID suffix
    /// stripped from every name.
    FullNames,
}

/// Which free-text column co-word analysis reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextSource {
    #[default]
    Title,
    Abstract,
}

/// One bibliographic entry, i.e. one row of the export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Row position in the input, starting at 0
    pub id: usize,
    /// Title of the work
    pub title: Option<String>,
    /// Publication year
    pub year: Option<i32>,
    /// Number of citations received, 0 when missing or not numeric
    pub cited_by: u64,
    /// Raw `Authors` cell
    pub authors: Option<String>,
    /// Raw `Author full names` cell
    pub author_full_names: Option<String>,
    /// Raw `Authors with affiliations` cell
    pub authors_with_affiliations: Option<String>,
    /// Raw `Affiliations` cell
    pub affiliations: Option<String>,
    /// Raw `References` cell
    pub references: Option<String>,
    /// Raw `Author Keywords` cell
    pub author_keywords: Option<String>,
    /// Raw `Index Keywords` cell
    pub index_keywords: Option<String>,
    /// Journal or source title
    pub source_title: Option<String>,
    /// Abstract text
    pub abstract_text: Option<String>,
    /// Document type, e.g. "Article" or "Conference Paper"
    pub document_type: Option<String>,
}

impl Record {
    /// Ordered author names from the chosen column. Not deduplicated.
    pub fn author_list(&self, source: AuthorSource) -> Vec<Entity> {
        match source {
            AuthorSource::Authors => {
                let raw = self.authors.as_deref();
                let separator = raw.map_or(Separator::Semicolon, normalize::author_separator);
                normalize::split_authors(raw, &separator)
            }
            AuthorSource::FullNames => {
                normalize::split_authors(self.author_full_names.as_deref(), &Separator::Semicolon)
            }
        }
    }

    /// Number of authors in the chosen column.
    pub fn author_count(&self, source: AuthorSource) -> usize {
        self.author_list(source).len()
    }

    /// Cited references, `;` separated.
    pub fn reference_list(&self) -> Vec<Entity> {
        normalize::split_field(self.references.as_deref(), &Separator::Semicolon)
    }

    /// Affiliation strings, `;` separated.
    pub fn affiliation_list(&self) -> Vec<Entity> {
        normalize::split_field(self.affiliations.as_deref(), &Separator::Semicolon)
    }

    /// Author keywords, lowercased.
    pub fn keyword_list(&self) -> Vec<Entity> {
        normalize::normalize_keywords(self.author_keywords.as_deref())
    }

    /// Distinct lowercase words of the title or abstract, sorted.
    pub fn words(&self, source: TextSource) -> Vec<Entity> {
        let text = match source {
            TextSource::Title => self.title.as_deref(),
            TextSource::Abstract => self.abstract_text.as_deref(),
        };
        text.map(normalize::title_words).unwrap_or_default()
    }

    /// Authors paired with their institution and country.
    pub fn affiliated_authors(&self) -> Vec<AffiliatedAuthor> {
        normalize::split_affiliated_authors(self.authors_with_affiliations.as_deref())
    }

    /// Distinct countries of the authors of this record.
    pub fn countries(&self) -> BTreeSet<Entity> {
        self.affiliated_authors()
            .into_iter()
            .filter_map(|author| author.country)
            .collect()
    }
}

/// Trait for implementing record parsers.
pub trait RecordParser {
    /// Parse decoded text containing a header row followed by one record per row.
    ///
    /// # Errors
    ///
    /// Returns [`BibliometricError::DataSource`] if the text is malformed or a
    /// required column is missing.
    fn parse(&self, input: &str) -> Result<Vec<Record>>;
}
