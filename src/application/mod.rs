// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// goal: turning a source CSV into raw, train, and test
// artifacts.
//
// Rules for this layer:
//   - No CSV parsing or shuffling here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination, logging, and error wrapping
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The ingestion workflow and its configuration
pub mod ingest_use_case;
