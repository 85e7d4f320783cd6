// ============================================================
// Layer 3 — IngestionArtifacts Domain Type
// ============================================================
// The result of a successful ingestion run: where the training
// and testing subsets were written. The next pipeline stage
// only needs these two locations.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Locations of the two split artifacts produced by one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionArtifacts {
    /// CSV holding the training subset
    pub train_data_path: PathBuf,

    /// CSV holding the testing subset
    pub test_data_path: PathBuf,
}

impl IngestionArtifacts {
    pub fn new(train_data_path: impl AsRef<Path>, test_data_path: impl AsRef<Path>) -> Self {
        Self {
            train_data_path: train_data_path.as_ref().to_path_buf(),
            test_data_path:  test_data_path.as_ref().to_path_buf(),
        }
    }

    /// The (train, test) paths as display strings.
    pub fn into_pair(self) -> (String, String) {
        (
            self.train_data_path.display().to_string(),
            self.test_data_path.display().to_string(),
        )
    }
}
