//! Source module - provenance of extracted records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the row a record was extracted from
///
/// Serialized untagged, so a JSON consumer sees either the explicit id string
/// taken from the input or the row's 1-based position as an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceId {
    /// 1-based position of the row in the input
    Position(u64),

    /// Explicit identifier supplied by the row, kept verbatim
    Text(String),
}

impl From<u64> for SourceId {
    fn from(position: u64) -> Self {
        SourceId::Position(position)
    }
}

impl From<String> for SourceId {
    fn from(id: String) -> Self {
        SourceId::Text(id)
    }
}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        SourceId::Text(id.to_string())
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceId::Position(position) => write!(f, "{}", position),
            SourceId::Text(id) => f.write_str(id),
        }
    }
}
