//! CLI argument parsing.

use clap::Parser;
use qapairs_extractor::{ExtractorConfig, DEFAULT_COLUMN};
use std::path::PathBuf;

/// qapairs - Extract question/answer pairs from a CSV column into JSON Lines.
#[derive(Debug, Parser)]
#[command(name = "qapairs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output JSON Lines file path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Column to parse for question/answer pairs
    #[arg(short, long, default_value = DEFAULT_COLUMN)]
    pub col: String,
}

impl Cli {
    /// Extraction settings selected by the arguments.
    pub fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig::with_column(self.col.clone())
    }
}
