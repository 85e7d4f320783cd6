// ============================================================
// Layer 6 — Logging Setup
// ============================================================
// Installs the global tracing subscriber.
//
//   stderr  : always on, human-readable fmt output
//   log file: only when a log directory is given; one file per
//              run named after the start time, e.g.
//              logs/03_05_2024_14_07_09.log
//
// Filtering uses RUST_LOG through EnvFilter, with
// `data_ingestion=info` added on top so progress events show
// up by default.
//
// The returned WorkerGuard flushes the file writer when it is
// dropped, so main must hold it until the process exits.
//
// Reference: tracing-subscriber and tracing-appender docs

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use std::{fs, path::Path};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directive added to whatever RUST_LOG contains.
pub const DEFAULT_DIRECTIVE: &str = "data_ingestion=info";

/// File name for a run that started at `started`.
pub fn log_file_name(started: &NaiveDateTime) -> String {
    started.format("%m_%d_%Y_%H_%M_%S.log").to_string()
}

/// Install the global subscriber. Call once, before any work starts.
pub fn init(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::from_default_env().add_directive(
        DEFAULT_DIRECTIVE
            .parse()
            .context("Invalid default log directive")?,
    );

    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create log directory '{}'", dir.display()))?;

            let file_name = log_file_name(&Local::now().naive_local());
            let appender  = tracing_appender::rolling::never(dir, &file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    if let Some(dir) = log_dir {
        tracing::debug!("Writing log file under '{}'", dir.display());
    }

    Ok(guard)
}
