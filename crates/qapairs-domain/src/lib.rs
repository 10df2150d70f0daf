//! qapairs Domain Layer
//!
//! Value types shared by the extractor and the command-line front end.
//!
//! ## Key Concepts
//!
//! - **Record**: One extracted question with its yes/no answer and provenance
//! - **Answer**: The normalized answer token (`Yes` or `No`)
//! - **SourceId**: Identifier of the row a record came from
//! - **IdGenerator**: Source of fresh record ids when no `SourceId` exists
//!
//! Nothing in this crate performs I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod answer;
pub mod record;
pub mod source;
pub mod traits;

// Re-exports for convenience
pub use answer::Answer;
pub use record::Record;
pub use source::SourceId;
pub use traits::{IdGenerator, UuidGenerator};
