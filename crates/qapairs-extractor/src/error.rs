//! Error types for the Extractor

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running the extraction pipeline
///
/// Extraction itself never fails; every variant here comes from the
/// surrounding file handling or from an invalid configuration.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Input file missing, unreadable, not UTF-8, or not valid CSV
    #[error("Cannot read input '{}': {source}", path.display())]
    InputAccess {
        /// Path of the input file
        path: PathBuf,
        /// Underlying CSV/IO error
        source: csv::Error,
    },

    /// Output file cannot be created or written
    #[error("Cannot write output '{}': {source}", path.display())]
    OutputAccess {
        /// Path of the output file
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Record could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::Serialization(e.to_string())
    }
}
