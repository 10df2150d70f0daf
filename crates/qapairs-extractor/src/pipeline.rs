//! End-to-end run: CSV rows in, JSON Lines records out

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::extractor::Extractor;
use crate::rows::{Row, RowReader};
use crate::sink::JsonLinesSink;
use crate::types::RunSummary;
use qapairs_domain::{IdGenerator, Record};
use std::path::Path;
use tracing::{debug, info, warn};

/// Extract records from every row, preserving row order then match order
///
/// Returns the records and the number of rows consumed.
pub fn extract_rows<I, G>(
    rows: I,
    extractor: &Extractor<G>,
    config: &ExtractorConfig,
) -> Result<(Vec<Record>, usize), ExtractorError>
where
    I: IntoIterator<Item = Result<Row, ExtractorError>>,
    G: IdGenerator,
{
    let mut records = Vec::new();
    let mut rows_read = 0;

    for row in rows {
        let row = row?;
        rows_read += 1;

        let source_id = row.source_id(&config.id_column);
        let found = extractor.extract(row.text(&config.column), Some(&source_id));

        debug!(
            "Row {} (source '{}'): {} pairs",
            row.position(),
            source_id,
            found.len()
        );

        records.extend(found);
    }

    Ok((records, rows_read))
}

/// Read `input`, extract every pair, and write them to `output`
pub fn run(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ExtractorConfig,
) -> Result<RunSummary, ExtractorError> {
    run_with(input, output, config, &Extractor::new())
}

/// Like [`run`], with a caller-supplied extractor
///
/// All rows are read before the output is opened, so a failure on the input
/// side leaves any existing output file untouched.
pub fn run_with<G: IdGenerator>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ExtractorConfig,
    extractor: &Extractor<G>,
) -> Result<RunSummary, ExtractorError> {
    let input = input.as_ref();
    let output = output.as_ref();

    config.validate().map_err(ExtractorError::Config)?;

    info!(
        "Reading '{}', scanning column '{}'",
        input.display(),
        config.column
    );

    let rows = RowReader::open(input, config)?;
    if !rows.has_column(&config.column) {
        warn!(
            "Column '{}' not found in header of '{}'; no pairs will be extracted",
            config.column,
            input.display()
        );
    }
    if !rows.has_column(&config.id_column) {
        debug!(
            "No '{}' column, using row positions as source ids",
            config.id_column
        );
    }

    let (records, rows_read) = extract_rows(rows, extractor, config)?;

    let mut sink = JsonLinesSink::create(output)?;
    sink.write_all(&records)?;
    let records_written = sink.written();
    sink.finish()?;

    info!(
        "Wrote {} records from {} rows to '{}'",
        records_written,
        rows_read,
        output.display()
    );

    Ok(RunSummary {
        rows_read,
        records_written,
    })
}
