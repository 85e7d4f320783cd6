// ============================================================
// Layer 4 — CSV Writer
// ============================================================
// Serialises a Table as CSV: header row first, then every data
// row, no index column. An existing file is truncated.
//
// The parent directory must already exist; the use case
// creates it before the first write.

use anyhow::{Context, Result};
use std::path::Path;

use crate::domain::table::Table;
use crate::domain::traits::TableSink;

/// Writes comma-delimited files.
pub struct CsvWriter {
    delimiter: u8,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableSink for CsvWriter {
    fn write(&self, table: &Table, path: &Path) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(path)
            .with_context(|| format!("Cannot create '{}'", path.display()))?;

        writer
            .write_record(table.headers())
            .with_context(|| format!("Cannot write header to '{}'", path.display()))?;

        for row in table.rows() {
            writer
                .write_record(row)
                .with_context(|| format!("Cannot write row to '{}'", path.display()))?;
        }

        // Flush explicitly; Drop would swallow the error
        writer
            .flush()
            .with_context(|| format!("Cannot flush '{}'", path.display()))?;

        tracing::debug!("Wrote {} rows to '{}'", table.row_count(), path.display());
        Ok(())
    }
}
