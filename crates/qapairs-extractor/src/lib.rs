//! qapairs Extractor
//!
//! Pulls question/answer pairs out of free text stored in a CSV column and
//! writes them as JSON Lines.
//!
//! # Overview
//!
//! Each row's text is scanned for a question (a run ending in `?` or `？`)
//! followed by a `Yes`/`No` answer in any casing. Every match becomes a
//! [`Record`](qapairs_domain::Record) whose id is derived from the row's source
//! id and the match's 1-based position within the row.
//!
//! # Architecture
//!
//! ```text
//! CSV → RowReader → Extractor → Records → JsonLinesSink → .jsonl
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use qapairs_extractor::{run, ExtractorConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExtractorConfig::with_column("input");
//! let summary = run("survey.csv", "survey.jsonl", &config)?;
//!
//! println!("Wrote {} records from {} rows", summary.records_written, summary.rows_read);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod types;
mod parser;
mod extractor;
mod rows;
mod sink;
mod pipeline;

#[cfg(test)]
mod tests;

pub use error::ExtractorError;
pub use config::{ExtractorConfig, DEFAULT_COLUMN, DEFAULT_ID_COLUMN};
pub use types::RunSummary;
pub use extractor::Extractor;
pub use rows::{Row, RowReader};
pub use sink::JsonLinesSink;
pub use pipeline::{extract_rows, run, run_with};
