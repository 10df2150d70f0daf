//! Answer module - the binary answer attached to each question

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized answer token
///
/// Input tokens are matched in any letter casing (`yes`, `YES`, `yEs`) but
/// are always emitted in capitalized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Answer {
    /// Affirmative answer
    Yes,

    /// Negative answer
    No,
}

impl Answer {
    /// Get the capitalized answer string
    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
        }
    }

    /// Parse an answer token, ignoring case
    ///
    /// # Examples
    ///
    /// ```
    /// use qapairs_domain::Answer;
    ///
    /// assert_eq!(Answer::parse("NO"), Some(Answer::No));
    /// assert_eq!(Answer::parse("yes"), Some(Answer::Yes));
    /// assert_eq!(Answer::parse("maybe"), None);
    /// ```
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("yes") {
            Some(Answer::Yes)
        } else if token.eq_ignore_ascii_case("no") {
            Some(Answer::No)
        } else {
            None
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any ASCII casing of a token parses to the same answer
        #[test]
        fn test_parse_ignores_ascii_case(
            yes in "[Yy][Ee][Ss]",
            no in "[Nn][Oo]",
        ) {
            prop_assert_eq!(Answer::parse(&yes), Some(Answer::Yes));
            prop_assert_eq!(Answer::parse(&no), Some(Answer::No));
        }

        /// Property: parsing only succeeds for yes/no tokens
        #[test]
        fn test_parse_rejects_other_words(word in "[a-zA-Z]{0,6}") {
            let lower = word.to_ascii_lowercase();
            let expected = match lower.as_str() {
                "yes" => Some(Answer::Yes),
                "no" => Some(Answer::No),
                _ => None,
            };
            prop_assert_eq!(Answer::parse(&word), expected);
        }
    }
}
