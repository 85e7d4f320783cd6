// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer reads and writes tables through these
// traits, never through the csv crate directly.
//
// Implementations:
//   - CsvLoader  → TableSource (data/loader.rs)
//   - CsvWriter  → TableSink   (data/writer.rs)
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use std::path::Path;

use crate::domain::table::Table;

// ─── TableSource ──────────────────────────────────────────────────────────────
/// Any component that can load a table from a location.
pub trait TableSource {
    fn load(&self, path: &Path) -> Result<Table>;
}

// ─── TableSink ────────────────────────────────────────────────────────────────
/// Any component that can persist a table to a location.
/// Existing files at `path` are overwritten.
pub trait TableSink {
    fn write(&self, table: &Table, path: &Path) -> Result<()>;
}
