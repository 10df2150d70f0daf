//! Core Extractor implementation

use crate::parser::parse_pairs;
use qapairs_domain::{IdGenerator, Record, SourceId, UuidGenerator};
use tracing::trace;

/// The Extractor turns a block of text into question/answer records
///
/// Extraction is a pure function of the text and source id; the id generator
/// is consulted only for text without a source id.
#[derive(Debug, Clone, Default)]
pub struct Extractor<G = UuidGenerator> {
    id_generator: G,
}

impl Extractor<UuidGenerator> {
    /// Create an Extractor that assigns random UUIDs when no source id exists
    pub fn new() -> Self {
        Self {
            id_generator: UuidGenerator,
        }
    }
}

impl<G: IdGenerator> Extractor<G> {
    /// Create an Extractor with a custom id generator
    pub fn with_id_generator(id_generator: G) -> Self {
        Self { id_generator }
    }

    /// Extract every question/answer pair from `text`
    ///
    /// With a source id, the n-th pair (1-based) gets id `"{source_id}_{n}"`.
    /// Without one, each pair gets a fresh id from the generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use qapairs_extractor::Extractor;
    /// use qapairs_domain::{Answer, SourceId};
    ///
    /// let extractor = Extractor::new();
    /// let records = extractor.extract("A? Yes B? No", Some(&SourceId::from("row7")));
    ///
    /// let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
    /// assert_eq!(ids, ["row7_1", "row7_2"]);
    /// assert_eq!(records[1].answer, Answer::No);
    /// ```
    pub fn extract(&self, text: &str, source_id: Option<&SourceId>) -> Vec<Record> {
        let records: Vec<Record> = parse_pairs(text)
            .into_iter()
            .enumerate()
            .map(|(idx, candidate)| {
                let id = match source_id {
                    Some(source) => format!("{}_{}", source, idx + 1),
                    None => self.id_generator.next_id(),
                };
                Record::new(id, candidate.question, candidate.answer, source_id.cloned())
            })
            .collect();

        trace!(
            "Extracted {} pairs from {} bytes of text",
            records.len(),
            text.len()
        );

        records
    }
}
