//! CSV format data structures.
//!
//! This module maps header positions to logical fields and turns raw rows into
//! [`Record`]s.

use crate::Record;
use crate::csv::config::{CsvConfig, Field};
use crate::error::DataSourceError;
use csv::StringRecord;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Resolved column position of every field present in a file.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ColumnMap {
    columns: BTreeMap<Field, usize>,
}

impl ColumnMap {
    /// Resolves every known field against the header row.
    ///
    /// Fails on the first required field that has no matching column.
    pub(crate) fn resolve(headers: &StringRecord, config: &CsvConfig) -> Result<Self, DataSourceError> {
        let headers: Vec<&str> = headers.iter().collect();
        let mut columns = BTreeMap::new();

        for field in Field::ALL {
            match config.find_column(field, &headers) {
                Some(index) => {
                    columns.insert(field, index);
                }
                None if config.is_required(field) => {
                    return Err(DataSourceError::MissingColumn {
                        field,
                        candidates: config.candidates(field).to_vec(),
                    });
                }
                None => {}
            }
        }

        Ok(Self { columns })
    }

    pub(crate) fn column(&self, field: Field) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    /// Trimmed cell value of `field`; `None` when the column is absent or the cell is blank.
    pub(crate) fn get<'r>(&self, field: Field, row: &'r StringRecord) -> Option<&'r str> {
        let value = row.get(self.column(field)?)?.trim();
        (!value.is_empty()).then_some(value)
    }

    fn get_string(&self, field: Field, row: &StringRecord) -> Option<String> {
        self.get(field, row).map(String::from)
    }

    /// Builds the record found at position `id`.
    pub(crate) fn to_record(&self, id: usize, row: &StringRecord) -> Record {
        Record {
            id,
            title: self.get_string(Field::Title, row),
            year: self.get(Field::Year, row).and_then(parse_year),
            cited_by: self.get(Field::CitedBy, row).map_or(0, parse_citations),
            authors: self.get_string(Field::Authors, row),
            author_full_names: self.get_string(Field::AuthorFullNames, row),
            authors_with_affiliations: self.get_string(Field::AuthorsWithAffiliations, row),
            affiliations: self.get_string(Field::Affiliations, row),
            references: self.get_string(Field::References, row),
            author_keywords: self.get_string(Field::AuthorKeywords, row),
            index_keywords: self.get_string(Field::IndexKeywords, row),
            source_title: self.get_string(Field::SourceTitle, row),
            abstract_text: self.get_string(Field::Abstract, row),
            document_type: self.get_string(Field::DocumentType, row),
        }
    }
}

/// Parses a whole number, also accepting integral floats such as `"2021.0"`.
///
/// Floats outside the `i64` range are rejected rather than clamped.
fn parse_whole_number(value: &str) -> Option<i64> {
    let value = value.trim();
    value.parse::<i64>().ok().or_else(|| {
        let float = value.parse::<f64>().ok()?;
        let in_range = float >= i64::MIN as f64 && float < i64::MAX as f64;
        (in_range && float.fract() == 0.0).then_some(float as i64)
    })
}

/// Years outside this range are treated as typos.
const PLAUSIBLE_YEARS: RangeInclusive<i64> = 1000..=9999;

pub(crate) fn parse_year(value: &str) -> Option<i32> {
    parse_whole_number(value)
        .filter(|year| PLAUSIBLE_YEARS.contains(year))
        .and_then(|year| i32::try_from(year).ok())
}

/// Citation count of a cell. Anything that is not a non-negative whole number counts as 0.
pub(crate) fn parse_citations(value: &str) -> u64 {
    parse_whole_number(value)
        .and_then(|count| u64::try_from(count).ok())
        .unwrap_or(0)
}
