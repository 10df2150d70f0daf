//! Extract command implementation.

use crate::cli::Cli;
use crate::error::Result;
use crate::output::Formatter;
use qapairs_extractor::RunSummary;
use tracing::debug;

/// Execute the extract command.
///
/// On success prints exactly one confirmation line to stdout.
pub fn execute_extract(args: &Cli, formatter: &Formatter) -> Result<RunSummary> {
    let config = args.extractor_config();
    debug!("Extractor config: {:?}", config);

    let summary = qapairs_extractor::run(&args.input, &args.output, &config)?;

    println!("{}", formatter.saved(&args.output));

    Ok(summary)
}
