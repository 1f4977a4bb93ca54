//! Table loading and mapping output for the renmap binary.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use renmap_common::RenameTable;
use renmap_emitter::write_document;

use crate::args::CliArgs;

/// Load the rename table, render the mapping document, flush the sink.
pub fn run(args: &CliArgs) -> Result<()> {
    let table = load_table(args.input.as_deref())?;
    tracing::debug!(classes = table.classes.len(), "rename table loaded");

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut out = write_document(BufWriter::new(file), &table.classes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            out.flush()
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = write_document(stdout.lock(), &table.classes)
                .context("failed to write mapping to stdout")?;
            out.flush().context("failed to write mapping to stdout")?;
        }
    }
    Ok(())
}

fn load_table(path: Option<&Path>) -> Result<RenameTable> {
    match path {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("{} is not a valid rename table", path.display()))
        }
        None => {
            serde_json::from_reader(io::stdin().lock()).context("stdin is not a valid rename table")
        }
    }
}
