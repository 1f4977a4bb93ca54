use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the renmap binary.
#[derive(Parser, Debug)]
#[command(
    name = "renmap",
    version,
    about = "Render a symbol rename table as a nested JSON mapping"
)]
pub struct CliArgs {
    /// Path to the rename table (JSON). Reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Write the mapping to this file instead of stdout.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}
