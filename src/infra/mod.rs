// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns shared by the other layers:
//
//   error.rs       : PipelineError, the single error type the
//                     ingestion stage hands back to its caller.
//                     Wraps the full anyhow cause chain together
//                     with the step that failed and the source
//                     location where the failure was caught.
//
//   logging.rs     : tracing subscriber setup. Always logs to
//                     stderr; optionally also to a per-run file
//                     under a log directory.
//
//   config_store.rs: Loading and saving IngestionConfig as JSON
//                     so artifact locations can be changed
//                     without touching code.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Pipeline error wrapper
pub mod error;

/// Tracing subscriber initialisation
pub mod logging;

/// IngestionConfig JSON persistence
pub mod config_store;
