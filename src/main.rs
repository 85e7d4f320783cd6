mod application;
mod cli;
mod data;
mod domain;
mod infra;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Held until exit so the file writer flushes
    let _log_guard = infra::logging::init(cli.log_dir.as_deref())?;

    cli.run()
}
