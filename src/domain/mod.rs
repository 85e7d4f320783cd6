// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits describing what the
// ingestion stage works with:
//
//   table.rs:     an in-memory delimited table (header + rows)
//   artifacts.rs: the paths handed back to the next stage
//   step.rs:      the ordered steps of one ingestion run
//   traits.rs:    where tables come from and where they go
//
// Rules for this layer:
//   - NO file I/O
//   - NO csv crate types
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// An in-memory table with a header row
pub mod table;

// Output locations returned by a successful run
pub mod artifacts;

// The ingestion state machine
pub mod step;

// Core abstractions (traits) that the data layer implements
pub mod traits;
