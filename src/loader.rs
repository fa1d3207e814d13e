//! Loading records from export files.
//!
//! [`Loader`] is the single entry point that turns a file into [`Record`]s. It
//! tries each configured text encoding until one decodes the file, then each
//! configured delimiter until every required field resolves to a column.
//!
//! # Example
//!
//! ```no_run
//! use bibliostat::{Field, Loader, LoaderConfig};
//!
//! let mut config = LoaderConfig::new();
//! config.set_required([Field::Authors, Field::CitedBy]);
//!
//! let records = Loader::new().with_config(config).load_path("scopus.csv")?;
//! println!("{} records", records.len());
//! # Ok::<(), bibliostat::BibliometricError>(())
//! ```

use crate::csv::{CsvConfig, CsvParser, Field};
use crate::encoding::{TextEncoding, decode_first};
use crate::error::DataSourceError;
use crate::{BibliometricError, Record, RecordParser, Result};
use std::path::Path;

/// Delimiters tried when none is configured: comma, tab, semicolon.
const DEFAULT_DELIMITERS: [u8; 3] = [b',', b'\t', b';'];

/// Configuration of a [`Loader`].
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    csv: CsvConfig,
    encodings: Vec<TextEncoding>,
    delimiters: Vec<u8>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LoaderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            csv: CsvConfig::new(),
            encodings: TextEncoding::DEFAULT_ORDER.to_vec(),
            delimiters: DEFAULT_DELIMITERS.to_vec(),
        }
    }

    /// Replaces the candidate column names of `field`.
    pub fn set_header_mapping(&mut self, field: Field, aliases: Vec<String>) -> &mut Self {
        self.csv.set_header_mapping(field, aliases);
        self
    }

    /// Replaces the set of fields that must be present.
    pub fn set_required<I: IntoIterator<Item = Field>>(&mut self, fields: I) -> &mut Self {
        self.csv.set_required(fields);
        self
    }

    /// Sets the encodings to try, in order.
    pub fn set_encodings(&mut self, encodings: Vec<TextEncoding>) -> &mut Self {
        self.encodings = encodings;
        self
    }

    /// Sets the delimiters to try, in order.
    pub fn set_delimiters(&mut self, delimiters: Vec<u8>) -> &mut Self {
        self.delimiters = delimiters;
        self
    }

    pub fn set_flexible(&mut self, flexible: bool) -> &mut Self {
        self.csv.set_flexible(flexible);
        self
    }

    pub fn csv(&self) -> &CsvConfig {
        &self.csv
    }
}

/// Reads export files into records.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: LoaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError`] if the file cannot be read, decoded or parsed, or
    /// if a required column is missing.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Record>> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| DataSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loading {}", path.display());
        self.load_bytes(&bytes)
    }

    /// Parses an in-memory export.
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<Vec<Record>> {
        let (encoding, text) = decode_first(bytes, &self.config.encodings)?;
        log::debug!("decoded input as {encoding}");
        self.load_str(&text)
    }

    /// Parses already decoded text, trying each configured delimiter.
    ///
    /// When no delimiter works, the error of the first one is returned.
    pub fn load_str(&self, text: &str) -> Result<Vec<Record>> {
        let mut first_error: Option<BibliometricError> = None;

        for &delimiter in &self.config.delimiters {
            let mut csv_config = self.config.csv.clone();
            csv_config.set_delimiter(delimiter);

            match CsvParser::new().with_config(csv_config).parse(text) {
                Ok(records) => {
                    log::info!(
                        "loaded {} records (delimiter {:?})",
                        records.len(),
                        char::from(delimiter)
                    );
                    return Ok(records);
                }
                Err(error) => {
                    log::debug!("delimiter {:?} rejected: {error}", char::from(delimiter));
                    first_error.get_or_insert(error);
                }
            }
        }

        Err(first_error.unwrap_or_else(|| DataSourceError::Empty.into()))
    }
}
