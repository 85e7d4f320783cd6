// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `ingest` and `init-config`
// and all their flags.
//
// Artifact locations for `ingest` are resolved in this order
// (later wins):
//   1. built-in defaults        (artifacts/data.csv, ...)
//   2. --config <file.json>
//   3. --artifacts-dir <dir>    (all three files under <dir>)
//   4. --raw-data-path / --train-data-path / --test-data-path
//
// Reference: Rust Book §12 (Building a CLI Program)

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::ingest_use_case::{IngestionConfig, DEFAULT_SOURCE_PATH};
use crate::infra::config_store::load_config;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read the source CSV, save a raw copy, and write train/test splits
    Ingest(IngestArgs),

    /// Write the default ingestion config to a JSON file
    InitConfig(InitConfigArgs),
}

/// All arguments for the `ingest` command.
#[derive(Args, Debug)]
pub struct IngestArgs {
    /// Source CSV file (must have a header row)
    #[arg(long, default_value = DEFAULT_SOURCE_PATH)]
    pub source: PathBuf,

    /// JSON file with raw_data_path / train_data_path / test_data_path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Put data.csv, train.csv and test.csv under this directory
    #[arg(long)]
    pub artifacts_dir: Option<PathBuf>,

    /// Where to save the untouched copy of the source table
    #[arg(long)]
    pub raw_data_path: Option<PathBuf>,

    /// Where to save the training subset
    #[arg(long)]
    pub train_data_path: Option<PathBuf>,

    /// Where to save the testing subset
    #[arg(long)]
    pub test_data_path: Option<PathBuf>,
}

/// Convert CLI IngestArgs into the application-layer IngestionConfig.
/// Fallible because --config has to be read from disk.
impl TryFrom<&IngestArgs> for IngestionConfig {
    type Error = anyhow::Error;

    fn try_from(a: &IngestArgs) -> Result<Self> {
        let mut cfg = match &a.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Cannot use --config '{}'", path.display()))?,
            None => IngestionConfig::default(),
        };

        if let Some(dir) = &a.artifacts_dir {
            cfg = IngestionConfig::in_dir(dir);
        }
        if let Some(p) = &a.raw_data_path {
            cfg.raw_data_path = p.clone();
        }
        if let Some(p) = &a.train_data_path {
            cfg.train_data_path = p.clone();
        }
        if let Some(p) = &a.test_data_path {
            cfg.test_data_path = p.clone();
        }

        Ok(cfg)
    }
}

/// Arguments for the `init-config` command
#[derive(Args, Debug)]
pub struct InitConfigArgs {
    /// File to write
    #[arg(long, default_value = "ingestion_config.json")]
    pub output: PathBuf,
}
