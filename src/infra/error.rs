// ============================================================
// Layer 6 — Pipeline Error
// ============================================================
// Every failure inside an ingestion run (missing source file,
// malformed CSV, too few rows to split, I/O or permission
// errors while writing) comes back to the caller as one type:
// PipelineError.
//
// What it carries:
//   - step:       which IngestionStep was active when it failed
//   - file, line: where in this crate the failure was caught
//   - source:     the underlying anyhow::Error with its full
//                 chain of context messages
//
// Callers that need the specific cause read the message text
// or walk `std::error::Error::source()`.
//
// Reference: thiserror crate documentation
//            Rust Book §9 (Error Handling)

use std::fmt;
use std::panic::Location;
use thiserror::Error;

use crate::domain::step::IngestionStep;

/// Execution context attached to a PipelineError.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorContext {
    pub step: IngestionStep,
    pub file: &'static str,
    pub line: u32,
}

impl ErrorContext {
    /// Record `step` together with the caller's source location.
    #[track_caller]
    pub fn capture(step: IngestionStep) -> Self {
        let loc = Location::caller();
        Self {
            step,
            file: loc.file(),
            line: loc.line(),
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}:{}]", self.step, self.file, self.line)
    }
}

/// The single error type returned by the ingestion stage.
#[derive(Debug, Error)]
#[error("ingestion failed while {context}: {source}")]
pub struct PipelineError {
    context: ErrorContext,
    #[source]
    source: anyhow::Error,
}

impl PipelineError {
    /// Wrap `source` with the failing step and the caller's location.
    #[track_caller]
    pub fn wrap(step: IngestionStep, source: anyhow::Error) -> Self {
        Self {
            context: ErrorContext::capture(step),
            source,
        }
    }

    pub fn context(&self) -> &ErrorContext {
        &self.context
    }

    /// The step that was running when the error occurred
    pub fn step(&self) -> IngestionStep {
        self.context.step
    }

    /// Every message in the cause chain, outermost first, joined with ": ".
    pub fn chain_message(&self) -> String {
        format!("{:#}", self.source)
    }
}
