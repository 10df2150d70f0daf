//! JSON Lines sink: one record per line, UTF-8, no enclosing array

use crate::error::ExtractorError;
use qapairs_domain::Record;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes records as newline-terminated compact JSON objects
pub struct JsonLinesSink<W: Write> {
    writer: BufWriter<W>,
    destination: PathBuf,
    written: usize,
}

impl JsonLinesSink<File> {
    /// Create (or truncate) the output file
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ExtractorError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| ExtractorError::OutputAccess {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file, path))
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap any writer; `destination` names it in errors
    pub fn new(writer: W, destination: impl Into<PathBuf>) -> Self {
        Self {
            writer: BufWriter::new(writer),
            destination: destination.into(),
            written: 0,
        }
    }

    /// Append one record as a single line
    pub fn write_record(&mut self, record: &Record) -> Result<(), ExtractorError> {
        serde_json::to_writer(&mut self.writer, record).map_err(|e| {
            if e.is_io() {
                self.output_error(io::Error::from(e))
            } else {
                ExtractorError::from(e)
            }
        })?;
        self.writer
            .write_all(b"\n")
            .map_err(|source| self.output_error(source))?;
        self.written += 1;
        Ok(())
    }

    /// Append every record in order
    pub fn write_all<'a>(
        &mut self,
        records: impl IntoIterator<Item = &'a Record>,
    ) -> Result<(), ExtractorError> {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Number of records written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush buffered output and return the inner writer
    pub fn finish(self) -> Result<W, ExtractorError> {
        let destination = self.destination;
        self.writer
            .into_inner()
            .map_err(|e| ExtractorError::OutputAccess {
                path: destination,
                source: e.into_error(),
            })
    }

    fn output_error(&self, source: io::Error) -> ExtractorError {
        ExtractorError::OutputAccess {
            path: self.destination.clone(),
            source,
        }
    }
}
