//! Property tests for extraction invariants

#[cfg(test)]
mod proptests {
    use crate::Extractor;
    use qapairs_domain::{Answer, SourceId};
    use proptest::prelude::*;

    /// Question bodies without question marks, mixing ASCII and CJK text
    fn body() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 ,.\u{4e00}-\u{4e2f}]{0,12}[a-zA-Z\u{4e00}-\u{4e2f}]"
    }

    fn mark() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("?"), Just("？")]
    }

    fn token() -> impl Strategy<Value = String> {
        "[Yy][Ee][Ss]|[Nn][Oo]"
    }

    proptest! {
        /// Property: every record ends in a question mark and has a normalized answer
        #[test]
        fn test_records_are_well_formed(text in "\\PC{0,80}") {
            for record in Extractor::new().extract(&text, None) {
                prop_assert!(record.question.ends_with('?') || record.question.ends_with('？'));
                prop_assert!(matches!(record.answer, Answer::Yes | Answer::No));
                prop_assert_eq!(record.question.trim(), record.question.as_str());
            }
        }

        /// Property: k generated pairs yield k records with ids source_1..source_k
        #[test]
        fn test_generated_pairs_are_all_found(
            pairs in prop::collection::vec((body(), mark(), "[ \t\n]{0,3}", token()), 0..6),
            source in "[a-z0-9]{1,6}",
        ) {
            let text: String = pairs
                .iter()
                .map(|(b, m, ws, t)| format!("{}{}{}{} ", b, m, ws, t))
                .collect();

            let source_id = SourceId::from(source.as_str());
            let records = Extractor::new().extract(&text, Some(&source_id));

            prop_assert_eq!(records.len(), pairs.len());
            for (n, (record, (b, m, _, t))) in records.iter().zip(&pairs).enumerate() {
                prop_assert_eq!(&record.id, &format!("{}_{}", source, n + 1));
                prop_assert_eq!(&record.question, &format!("{}{}", b.trim_start(), m));
                prop_assert_eq!(record.answer, Answer::parse(t).unwrap());
            }
        }

        /// Property: text without any question mark never yields records
        #[test]
        fn test_no_mark_no_records(text in "[^?？]{0,80}") {
            prop_assert!(Extractor::new().extract(&text, None).is_empty());
        }
    }
}
