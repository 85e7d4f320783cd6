// ============================================================
// Layer 3 — Ingestion Steps
// ============================================================
// One ingestion run walks these steps strictly in order:
//
//   Reading → PreparingOutput → WritingRaw → Splitting
//           → WritingTrain → WritingTest → Done
//
// A failure at any step ends the run. The step that was
// active at the time is reported inside the PipelineError.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionStep {
    /// Loading the source table
    Reading,
    /// Creating parent directories for the output paths
    PreparingOutput,
    /// Writing the untouched copy of the source table
    WritingRaw,
    /// Shuffling and cutting rows into train/test
    Splitting,
    WritingTrain,
    WritingTest,
    Done,
}

impl IngestionStep {
    /// The step that follows this one. Done is terminal.
    pub fn next(self) -> Self {
        use IngestionStep::*;
        match self {
            Reading         => PreparingOutput,
            PreparingOutput => WritingRaw,
            WritingRaw      => Splitting,
            Splitting       => WritingTrain,
            WritingTrain    => WritingTest,
            WritingTest     => Done,
            Done            => Done,
        }
    }
}

impl fmt::Display for IngestionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IngestionStep::Reading         => "reading source table",
            IngestionStep::PreparingOutput => "preparing output directory",
            IngestionStep::WritingRaw      => "writing raw artifact",
            IngestionStep::Splitting       => "splitting train/test",
            IngestionStep::WritingTrain    => "writing train artifact",
            IngestionStep::WritingTest     => "writing test artifact",
            IngestionStep::Done            => "done",
        };
        f.write_str(s)
    }
}
