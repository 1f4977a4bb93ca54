use clap::Parser;

use renmap_cli::args::CliArgs;
use renmap_cli::{driver, tracing_config};

fn main() -> anyhow::Result<()> {
    tracing_config::init_tracing();
    let args = CliArgs::parse();
    driver::run(&args)
}
