// ============================================================
// Layer 3 — Table Domain Type
// ============================================================
// A two-dimensional table of string cells with a header row.
//
// Cells are kept exactly as they appeared in the source file.
// Nothing is parsed into numbers, so writing a table back out
// reproduces every value unchanged.
//
// Equality is "same headers, same rows, same cell values",
// which is what the derived PartialEq gives us.
//
// Reference: Rust Book §8 (Vectors)

/// A single data row: one string per column.
pub type Row = Vec<String>;

/// A delimited table loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column names from the header row, in file order
    headers: Vec<String>,

    /// Data rows, each with exactly `headers.len()` cells
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from a header and its rows.
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// Build a new table from `rows` under this table's header.
    /// Used to wrap each side of a split.
    pub fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            headers: self.headers.clone(),
            rows,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of data rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// All values in the named column, top to bottom.
    /// Returns None if no column has that name.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.headers.iter().position(|h| h == name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).map(String::as_str).unwrap_or(""))
                .collect(),
        )
    }
}
