// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with `clap`.
// All real work is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `ingest`     : runs the ingestion stage and prints the
//                      train/test artifact paths
//   2. `init-config`: writes the default config as JSON
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, IngestArgs, InitConfigArgs};
use std::path::PathBuf;

use crate::application::ingest_use_case::IngestionConfig;

#[derive(Parser, Debug)]
#[command(
    name = "data-ingestion",
    version,
    about = "Ingest a CSV dataset and split it into train/test artifacts."
)]
pub struct Cli {
    /// Also write logs to a timestamped file in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct handler.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Ingest(args)     => run_ingest(args),
            Commands::InitConfig(args) => run_init_config(args),
        }
    }
}

/// Handles the `ingest` subcommand.
fn run_ingest(args: IngestArgs) -> Result<()> {
    use crate::application::ingest_use_case::IngestUseCase;

    let config   = IngestionConfig::try_from(&args)?;
    let use_case = IngestUseCase::new(config).with_source(args.source);

    let (train, test) = use_case.execute()?.into_pair();
    println!("train_data_path={train}");
    println!("test_data_path={test}");
    Ok(())
}

/// Handles the `init-config` subcommand.
fn run_init_config(args: InitConfigArgs) -> Result<()> {
    use crate::infra::config_store::save_config;

    save_config(&IngestionConfig::default(), &args.output)?;
    println!("Wrote default ingestion config to {}", args.output.display());
    Ok(())
}
