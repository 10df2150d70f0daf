//! Configuration for the extraction pipeline

use serde::{Deserialize, Serialize};

/// Default name of the column holding free text
pub const DEFAULT_COLUMN: &str = "input";

/// Default name of the column holding an explicit row identifier
pub const DEFAULT_ID_COLUMN: &str = "id";

/// Configuration for reading rows and extracting pairs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Column scanned for question/answer pairs
    #[serde(default = "default_column")]
    pub column: String,

    /// Column supplying an explicit source id; when the header lacks it,
    /// rows are identified by their 1-based position
    #[serde(default = "default_id_column")]
    pub id_column: String,

    /// Field delimiter of the input file (ASCII)
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl ExtractorConfig {
    /// Create a configuration scanning the given column
    pub fn with_column(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.column.is_empty() {
            return Err("column must not be empty".to_string());
        }
        if self.id_column.is_empty() {
            return Err("id_column must not be empty".to_string());
        }
        if !self.delimiter.is_ascii() {
            return Err(format!("delimiter {:?} must be an ASCII character", self.delimiter));
        }
        if matches!(self.delimiter, '"' | '\n' | '\r') {
            return Err(format!("delimiter {:?} is reserved", self.delimiter));
        }
        Ok(())
    }

    /// Delimiter as the single byte the CSV reader expects
    pub(crate) fn delimiter_byte(&self) -> u8 {
        // validate() guarantees the delimiter is ASCII
        self.delimiter as u8
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            column: default_column(),
            id_column: default_id_column(),
            delimiter: default_delimiter(),
        }
    }
}

fn default_column() -> String {
    DEFAULT_COLUMN.to_string()
}

fn default_id_column() -> String {
    DEFAULT_ID_COLUMN.to_string()
}

fn default_delimiter() -> char {
    ','
}
