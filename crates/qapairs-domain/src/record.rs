//! Record module - the unit emitted for every question/answer pair

use crate::{Answer, SourceId};
use serde::{Deserialize, Serialize};

/// One extracted question/answer pair
///
/// Field order and names match the JSON Lines output:
/// `id`, `Question`, `Answer`, `source_id`.
/// Records are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier, unique within a run
    pub id: String,

    /// Question text, trimmed, ending in `?` or `？`
    #[serde(rename = "Question")]
    pub question: String,

    /// Normalized answer
    #[serde(rename = "Answer")]
    pub answer: Answer,

    /// Row the record came from, `null` when unknown
    pub source_id: Option<SourceId>,
}

impl Record {
    /// Create a new record
    pub fn new(
        id: String,
        question: String,
        answer: Answer,
        source_id: Option<SourceId>,
    ) -> Self {
        Self {
            id,
            question,
            answer,
            source_id,
        }
    }
}
