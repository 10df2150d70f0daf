//! Parse free text into question/answer candidates

use crate::types::QaCandidate;
use qapairs_domain::Answer;
use regex::Regex;
use std::sync::OnceLock;

/// A run of non-question-mark characters, the mark itself (ASCII `?` or
/// full-width `？`), optional whitespace, then a yes/no token in any casing.
///
/// Only the token is case-insensitive. It is spelled out with ASCII classes so
/// Unicode case folding (e.g. `ſ` for `s`) can never produce a token that
/// fails to normalize.
///
/// Whitespace also covers the information separators U+001C..U+001F, which
/// `\s` leaves out.
static QA_PATTERN: OnceLock<Regex> = OnceLock::new();

#[allow(clippy::expect_used)]
fn qa_pattern() -> &'static Regex {
    QA_PATTERN.get_or_init(|| {
        Regex::new(r"([^?？]+[?？])[\s\x1C-\x1F]*([Yy][Ee][Ss]|[Nn][Oo])")
            .expect("static question/answer pattern is valid")
    })
}

/// Find every question/answer pair in `text`, in document order
///
/// Matches are leftmost-first and non-overlapping. A question mark with no
/// yes/no token after it is skipped and scanning continues behind it.
pub(crate) fn parse_pairs(text: &str) -> Vec<QaCandidate> {
    qa_pattern()
        .captures_iter(text)
        .filter_map(|caps| {
            let question = caps.get(1)?.as_str().trim_matches(is_space);
            let answer = Answer::parse(caps.get(2)?.as_str())?;
            Some(QaCandidate {
                question: question.to_string(),
                answer,
            })
        })
        .collect()
}

/// Unicode whitespace plus the information separators U+001C..U+001F
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
