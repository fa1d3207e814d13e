//! CSV format parser implementation.
//!
//! Parses bibliographic exports (Scopus, Web of Science saved as CSV, Lens, ...)
//! with configurable column names.
//!
//! # Example
//!
//! ```
//! use bibliostat::{CsvParser, RecordParser};
//!
//! let input = "Authors,Title,Year,Cited by\n\"Smith, J.; Doe, A.\",Example Paper,2023,4";
//!
//! let parser = CsvParser::new();
//! let records = parser.parse(input).unwrap();
//! assert_eq!(records[0].title.as_deref(), Some("Example Paper"));
//! assert_eq!(records[0].cited_by, 4);
//! ```

mod config;
mod structure;

pub use config::{CsvConfig, Field};

use crate::error::DataSourceError;
use crate::{Record, RecordParser, Result};
use csv::ReaderBuilder;
use structure::ColumnMap;

/// Parser for CSV-formatted bibliographic exports.
///
/// # Examples
///
/// With custom configuration:
/// ```
/// use bibliostat::csv::{CsvConfig, CsvParser, Field};
///
/// let mut config = CsvConfig::new();
/// config.set_delimiter(b'\t').set_required([Field::Year]);
///
/// let parser = CsvParser::new().with_config(config);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CsvParser {
    config: CsvConfig,
}

impl CsvParser {
    /// Creates a new CSV parser with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: CsvConfig::new(),
        }
    }

    /// Creates a new CSV parser with custom configuration
    #[must_use]
    pub fn with_config(mut self, config: CsvConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &CsvConfig {
        &self.config
    }
}

impl RecordParser for CsvParser {
    fn parse(&self, input: &str) -> Result<Vec<Record>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.config.delimiter())
            .flexible(self.config.flexible())
            .has_headers(true)
            .from_reader(input.as_bytes());

        let headers = reader.headers()?.clone();
        if headers.iter().all(|header| header.trim().is_empty()) {
            return Err(DataSourceError::Empty.into());
        }

        let columns = ColumnMap::resolve(&headers, &self.config)?;
        log::debug!(
            "resolved columns: {:?}",
            crate::csv::Field::ALL
                .iter()
                .filter_map(|&field| columns.column(field).map(|i| (field, &headers[i])))
                .collect::<Vec<_>>()
        );

        let mut records = Vec::new();
        for (id, result) in reader.records().enumerate() {
            let row = result?;
            records.push(columns.to_record(id, &row));
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BibliometricError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_basic_csv() {
        let input = "\
Authors,Title,Year,Source title,Cited by
\"Smith, J.; Doe, A.\",Test Paper,2023,Test Journal,10
\"Roe, B.\",Another Paper,2022,Another Journal,";

        let records = CsvParser::new().parse(input).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 0);
        assert_eq!(records[1].id, 1);
        assert_eq!(records[0].title.as_deref(), Some("Test Paper"));
        assert_eq!(records[0].year, Some(2023));
        assert_eq!(records[0].source_title.as_deref(), Some("Test Journal"));
        assert_eq!(records[0].cited_by, 10);
        assert_eq!(records[1].cited_by, 0);
    }

    #[test]
    fn test_custom_headers() {
        let input = "\
Writers,Article Name,Published
\"Smith, J.\",Test Paper,2023";

        let mut config = CsvConfig::new();
        config
            .set_header_mapping(Field::Title, vec!["Article Name".to_string()])
            .set_header_mapping(Field::Authors, vec!["Writers".to_string()])
            .set_header_mapping(Field::Year, vec!["Published".to_string()]);

        let records = CsvParser::new().with_config(config).parse(input).unwrap();
        assert_eq!(records[0].title.as_deref(), Some("Test Paper"));
        assert_eq!(records[0].authors.as_deref(), Some("Smith, J."));
        assert_eq!(records[0].year, Some(2023));
    }

    #[test]
    fn test_custom_delimiter() {
        let input = "Authors;Title;Year\nSmith J.;Test Paper;2023";

        let mut config = CsvConfig::new();
        config.set_delimiter(b';');

        let records = CsvParser::new().with_config(config).parse(input).unwrap();
        assert_eq!(records[0].title.as_deref(), Some("Test Paper"));
        assert_eq!(records[0].year, Some(2023));
    }

    #[test]
    fn test_missing_required_column() {
        let result = CsvParser::new().parse("Title,Year\nTest Paper,2023");
        assert!(matches!(
            result,
            Err(BibliometricError::DataSource(DataSourceError::MissingColumn { .. }))
        ));
    }

    #[test]
    fn test_empty_input() {
        let result = CsvParser::new().parse("");
        assert!(matches!(
            result,
            Err(BibliometricError::DataSource(DataSourceError::Empty))
        ));
    }

    #[test]
    fn test_ragged_rows() {
        let input = "Authors,Title\n\"Doe, A.\",Paper,extra";
        let result = CsvParser::new().parse(input);
        assert!(matches!(
            result,
            Err(BibliometricError::DataSource(DataSourceError::Csv(_)))
        ));

        let mut config = CsvConfig::new();
        config.set_flexible(true);
        let records = CsvParser::new().with_config(config).parse(input).unwrap();
        assert_eq!(records[0].title.as_deref(), Some("Paper"));
    }
}
