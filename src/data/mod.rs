// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything that touches table contents or table files.
//
// One ingestion run flows in this order:
//
//   source .csv
//       │
//       ▼
//   CsvLoader         → parses the file into a Table
//       │
//       ├──────────────► CsvWriter → raw artifact (data.csv)
//       ▼
//   split_train_test  → seeded shuffle, 80/20 cut
//       │
//       ├──────────────► CsvWriter → train artifact (train.csv)
//       └──────────────► CsvWriter → test artifact  (test.csv)
//
// Reference: Rust Book §13 (Iterators and Closures)
//            csv crate documentation

/// Reads delimited files into a Table
pub mod loader;

/// Writes a Table back out as CSV
pub mod writer;

/// Shuffles and splits rows into train/test sets
pub mod splitter;
