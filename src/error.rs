//! Error types for loading and normalizing bibliographic data.

use crate::csv::Field;
use crate::encoding::TextEncoding;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while producing or interpreting records.
#[derive(Error, Debug)]
pub enum BibliometricError {
    #[error(transparent)]
    DataSource(#[from] DataSourceError),

    #[error("Malformed field {field}: {message}")]
    MalformedField { field: String, message: String },
}

/// The input file could not be turned into records. Always fatal for a run.
#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input could not be decoded with any of the encodings {tried:?}")]
    Encoding { tried: Vec<TextEncoding> },

    #[error("No column found for {field} (tried {candidates:?})")]
    MissingColumn {
        field: Field,
        candidates: Vec<String>,
    },

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Input has no header row")]
    Empty,
}

impl From<::csv::Error> for DataSourceError {
    fn from(err: ::csv::Error) -> Self {
        DataSourceError::Csv(err.to_string())
    }
}

impl From<::csv::Error> for BibliometricError {
    fn from(err: ::csv::Error) -> Self {
        BibliometricError::DataSource(err.into())
    }
}
