//! Intermediate and summary types for extraction

use qapairs_domain::Answer;

/// A matched pair before an id and provenance are attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QaCandidate {
    pub question: String,
    pub answer: Answer,
}

/// Outcome of a full input-to-output run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Data rows read from the input (header excluded)
    pub rows_read: usize,

    /// Records written to the output
    pub records_written: usize,
}
