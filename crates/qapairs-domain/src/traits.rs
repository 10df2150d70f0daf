//! Trait definitions for non-deterministic collaborators
//!
//! Random id generation is the only source of non-determinism in extraction,
//! so it sits behind a trait that tests can replace.

/// Source of fresh record identifiers
///
/// Used for records whose row has no `SourceId`. Every call must return an id
/// that is unique for the lifetime of the process.
pub trait IdGenerator {
    /// Produce a new identifier
    fn next_id(&self) -> String;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}

/// Random UUIDv4 identifiers (122 random bits)
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    /// Generate a new hyphenated UUIDv4 string
    ///
    /// # Examples
    ///
    /// ```
    /// use qapairs_domain::{IdGenerator, UuidGenerator};
    ///
    /// let id = UuidGenerator.next_id();
    /// assert_eq!(id.len(), 36);
    /// ```
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_generator_produces_valid_v4() {
        let id = UuidGenerator.next_id();
        let parsed = uuid::Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_uuid_generator_is_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| UuidGenerator.next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_reference_forwards() {
        fn take(generator: impl IdGenerator) -> String {
            generator.next_id()
        }

        let generator = UuidGenerator;
        assert_eq!(take(&generator).len(), 36);
    }
}
