// ============================================================
// Layer 4 — CSV Loader
// ============================================================
// Loads a delimited text file with a header row into a Table.
//
// Checks performed (everything else is taken as-is):
//   - the file can be opened
//   - a non-empty header row is present
//   - every record has the same number of fields as the header
//
// Cells stay as strings. No type inference happens here, so
// a value like "007" is written back out as "007".
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::domain::table::{Row, Table};
use crate::domain::traits::TableSource;

/// Reads comma-delimited files.
pub struct CsvLoader {
    delimiter: u8,
}

impl CsvLoader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl TableSource for CsvLoader {
    fn load(&self, path: &Path) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(false)
            .from_path(path)
            .with_context(|| format!("Cannot open source table '{}'", path.display()))?;

        let headers: Vec<String> = reader
            .headers()
            .with_context(|| format!("Cannot read header row of '{}'", path.display()))?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.is_empty() {
            bail!("Source table '{}' has no header row", path.display());
        }

        let mut rows: Vec<Row> = Vec::new();
        for (row_no, result) in reader.records().enumerate() {
            // row_no + 2: 1-based, plus the header line
            let record = result
                .with_context(|| format!("Malformed record at line {} of '{}'", row_no + 2, path.display()))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        tracing::debug!(
            "Parsed '{}': {} rows x {} columns",
            path.display(),
            rows.len(),
            headers.len()
        );

        Ok(Table::new(headers, rows))
    }
}
