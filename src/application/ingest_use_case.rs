// ============================================================
// Layer 2 — IngestUseCase
// ============================================================
// Runs the data ingestion stage in order:
//
//   Step 1: Read the source CSV                 (Layer 4 - data)
//   Step 2: Create the output directories
//   Step 3: Write the raw copy                  (Layer 4 - data)
//   Step 4: Shuffle and split 80/20, seed 42    (Layer 4 - data)
//   Step 5: Write the training subset           (Layer 4 - data)
//   Step 6: Write the testing subset            (Layer 4 - data)
//
// and returns where the training and testing subsets went.
//
// Any failure stops the run. It is wrapped once, in execute(),
// into a PipelineError that names the step that failed. Files
// written before the failure stay on disk and must not be
// trusted.
//
// Running twice overwrites the same three files.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §13 (Iterators and Closures)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use crate::data::{
    loader::CsvLoader,
    splitter::{split_train_test, SPLIT_SEED, TEST_FRACTION},
    writer::CsvWriter,
};
use crate::domain::{
    artifacts::IngestionArtifacts,
    step::IngestionStep,
    traits::{TableSink, TableSource},
};
use crate::infra::error::PipelineError;

/// Where the source dataset is read from unless overridden.
pub const DEFAULT_SOURCE_PATH: &str = "Notebook/data/stud.csv";

/// Directory holding all three artifacts in the default config.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

// ─── Ingestion Configuration ─────────────────────────────────────────────────
// The three output locations for one ingestion stage.
// Serialisable so it can be kept in a JSON file (infra/config_store.rs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestionConfig {
    /// Untouched copy of the source table
    pub raw_data_path:   PathBuf,
    pub train_data_path: PathBuf,
    pub test_data_path:  PathBuf,
}

impl IngestionConfig {
    /// All three artifacts under `dir`, with the default file names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            raw_data_path:   dir.join("data.csv"),
            train_data_path: dir.join("train.csv"),
            test_data_path:  dir.join("test.csv"),
        }
    }

    /// Distinct, non-empty parent directories of the three output paths.
    fn output_dirs(&self) -> BTreeSet<&Path> {
        [&self.raw_data_path, &self.train_data_path, &self.test_data_path]
            .into_iter()
            .filter_map(|p| p.parent())
            .filter(|p| !p.as_os_str().is_empty())
            .collect()
    }
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self::in_dir(DEFAULT_ARTIFACTS_DIR)
    }
}

// ─── IngestUseCase ────────────────────────────────────────────────────────────
// Owns the config (fixed for the life of the instance) and the
// source location.
pub struct IngestUseCase {
    config: IngestionConfig,
    source: PathBuf,
}

impl IngestUseCase {
    /// Create a use case reading from DEFAULT_SOURCE_PATH
    pub fn new(config: IngestionConfig) -> Self {
        Self {
            config,
            source: PathBuf::from(DEFAULT_SOURCE_PATH),
        }
    }

    /// Read the source table from `path` instead of the default
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = path.into();
        self
    }

    pub fn config(&self) -> &IngestionConfig {
        &self.config
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Execute the ingestion stage end to end.
    ///
    /// On success returns the train and test artifact locations.
    /// On failure returns a PipelineError wrapping the cause.
    pub fn execute(&self) -> Result<IngestionArtifacts, PipelineError> {
        tracing::info!("Entered the data ingestion stage");

        let mut step = IngestionStep::Reading;
        self.run(&mut step).map_err(|e| {
            let err = PipelineError::wrap(step, e);
            tracing::error!("Data ingestion failed at {}: {}", err.context(), err.chain_message());
            err
        })
    }

    /// The ingestion steps. `step` is advanced as each one completes
    /// so the caller knows where a failure happened.
    fn run(&self, step: &mut IngestionStep) -> Result<IngestionArtifacts> {
        let cfg    = &self.config;
        let loader = CsvLoader::new();
        let writer = CsvWriter::new();

        // ── Step 1: Read the source table ────────────────────────────────────
        let table = loader.load(&self.source)?;
        tracing::info!(
            "Read the dataset from '{}': {} rows x {} columns",
            self.source.display(),
            table.row_count(),
            table.column_count()
        );
        *step = step.next();

        // ── Step 2: Make sure every output directory exists ──────────────────
        for dir in cfg.output_dirs() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        }
        *step = step.next();

        // ── Step 3: Raw copy ──────────────────────────────────────────────────
        writer.write(&table, &cfg.raw_data_path)?;
        tracing::info!("Saved raw data to '{}'", cfg.raw_data_path.display());
        *step = step.next();

        // ── Step 4: Train / test split (80/20) ───────────────────────────────
        tracing::info!("Train test split initiated");
        let (train_rows, test_rows) =
            split_train_test(table.rows().to_vec(), TEST_FRACTION, SPLIT_SEED)?;
        let train = table.with_rows(train_rows);
        let test  = table.with_rows(test_rows);
        tracing::info!(
            "Split: {} train rows, {} test rows",
            train.row_count(),
            test.row_count()
        );
        *step = step.next();

        // ── Step 5: Training subset ───────────────────────────────────────────
        writer.write(&train, &cfg.train_data_path)?;
        *step = step.next();

        // ── Step 6: Testing subset ────────────────────────────────────────────
        writer.write(&test, &cfg.test_data_path)?;
        *step = step.next();

        tracing::info!("Ingestion of the data is complete");

        Ok(IngestionArtifacts::new(&cfg.train_data_path, &cfg.test_data_path))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::Table;
    use tempfile::TempDir;

    const FIVE_ROWS: &str = "id,score\n1,10\n2,20\n3,30\n4,40\n5,50\n";

    /// Write `csv` as the source file and point a use case at it,
    /// with all artifacts under `<tmp>/artifacts`.
    fn setup(csv: &str) -> (TempDir, IngestUseCase) {
        let dir    = TempDir::new().unwrap();
        let source = dir.path().join("stud.csv");
        fs::write(&source, csv).unwrap();

        let cfg = IngestionConfig::in_dir(dir.path().join("artifacts"));
        let uc  = IngestUseCase::new(cfg).with_source(source);
        (dir, uc)
    }

    fn load(path: &Path) -> Table {
        CsvLoader::new().load(path).unwrap()
    }

    fn many_rows(n: usize) -> String {
        let mut csv = String::from("id,gender,math_score\n");
        for i in 0..n {
            let gender = if i % 3 == 0 { "female" } else { "male" };
            csv.push_str(&format!("{i},{gender},{}\n", (i * 37) % 100));
        }
        csv
    }

    #[test]
    fn test_default_config_paths() {
        let cfg = IngestionConfig::default();
        assert_eq!(cfg.raw_data_path,   Path::new("artifacts").join("data.csv"));
        assert_eq!(cfg.train_data_path, Path::new("artifacts").join("train.csv"));
        assert_eq!(cfg.test_data_path,  Path::new("artifacts").join("test.csv"));
        assert_eq!(cfg.output_dirs().len(), 1);
    }

    #[test]
    fn test_default_source_path() {
        let uc = IngestUseCase::new(IngestionConfig::default());
        assert_eq!(uc.source(), Path::new(DEFAULT_SOURCE_PATH));
    }

    #[test]
    fn test_five_row_scenario() {
        let (_dir, uc) = setup(FIVE_ROWS);
        let artifacts  = uc.execute().unwrap();

        assert_eq!(artifacts.train_data_path, uc.config().train_data_path);
        assert_eq!(artifacts.test_data_path,  uc.config().test_data_path);

        let train = load(&artifacts.train_data_path);
        let test  = load(&artifacts.test_data_path);
        assert_eq!(train.row_count(), 4);
        assert_eq!(test.row_count(),  1);

        let mut ids: Vec<&str> = train.column("id").unwrap();
        ids.extend(test.column("id").unwrap());
        ids.sort();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_split_is_disjoint_and_total() {
        let (_dir, uc) = setup(&many_rows(137));
        let artifacts  = uc.execute().unwrap();

        let source = load(uc.source());
        let train  = load(&artifacts.train_data_path);
        let test   = load(&artifacts.test_data_path);

        assert_eq!(train.headers(), source.headers());
        assert_eq!(test.headers(),  source.headers());
        assert_eq!(train.row_count() + test.row_count(), 137);

        let train_set: BTreeSet<_> = train.rows().iter().cloned().collect();
        let test_set:  BTreeSet<_> = test.rows().iter().cloned().collect();
        let all:       BTreeSet<_> = source.rows().iter().cloned().collect();
        assert!(train_set.is_disjoint(&test_set));
        assert_eq!(train_set.union(&test_set).cloned().collect::<BTreeSet<_>>(), all);

        let expected = (0.8 * 137.0_f64).round() as i64;
        assert!((train.row_count() as i64 - expected).abs() <= 1);
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let (_dir, uc) = setup(&many_rows(40));

        let first       = uc.execute().unwrap();
        let train_bytes = fs::read(&first.train_data_path).unwrap();
        let test_bytes  = fs::read(&first.test_data_path).unwrap();

        let second = uc.execute().unwrap();
        assert_eq!(fs::read(&second.train_data_path).unwrap(), train_bytes);
        assert_eq!(fs::read(&second.test_data_path).unwrap(),  test_bytes);
    }

    #[test]
    fn test_raw_artifact_matches_source() {
        let csv = "name,comment,score\nann,\"likes, commas\",1.50\nbo,plain,007\ncy,\"says \"\"hi\"\"\",3\n";
        let (_dir, uc) = setup(csv);
        uc.execute().unwrap();

        let source = load(uc.source());
        let raw    = load(&uc.config().raw_data_path);
        assert_eq!(raw, source);
        assert_eq!(raw.column("score"), Some(vec!["1.50", "007", "3"]));
    }

    #[test]
    fn test_missing_source_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let cfg = IngestionConfig::in_dir(dir.path().join("artifacts"));
        let uc  = IngestUseCase::new(cfg.clone()).with_source(dir.path().join("missing.csv"));

        let err = uc.execute().unwrap_err();
        assert_eq!(err.step(), IngestionStep::Reading);
        assert!(err.to_string().contains("Cannot open source table"));

        assert!(!cfg.raw_data_path.exists());
        assert!(!cfg.train_data_path.exists());
        assert!(!cfg.test_data_path.exists());
    }

    #[test]
    fn test_too_few_rows_fails_after_raw_copy() {
        let (_dir, uc) = setup("id,score\n1,10\n");

        let err = uc.execute().unwrap_err();
        assert_eq!(err.step(), IngestionStep::Splitting);
        assert!(uc.config().raw_data_path.exists());
        assert!(!uc.config().train_data_path.exists());
    }

    #[test]
    fn test_failed_test_write_leaves_train_behind() {
        let dir    = TempDir::new().unwrap();
        let source = dir.path().join("stud.csv");
        fs::write(&source, FIVE_ROWS).unwrap();

        // A directory where the test CSV should go makes that write fail
        let blocked = dir.path().join("artifacts").join("test.csv");
        fs::create_dir_all(&blocked).unwrap();

        let cfg = IngestionConfig::in_dir(dir.path().join("artifacts"));
        let uc  = IngestUseCase::new(cfg).with_source(source);

        let err = uc.execute().unwrap_err();
        assert_eq!(err.step(), IngestionStep::WritingTest);
        assert_eq!(load(&uc.config().train_data_path).row_count(), 4);
    }

    #[test]
    fn test_creates_separate_parent_dirs() {
        let dir    = TempDir::new().unwrap();
        let source = dir.path().join("stud.csv");
        fs::write(&source, FIVE_ROWS).unwrap();

        let cfg = IngestionConfig {
            raw_data_path:   dir.path().join("raw").join("data.csv"),
            train_data_path: dir.path().join("splits").join("train.csv"),
            test_data_path:  dir.path().join("splits").join("test.csv"),
        };
        let uc = IngestUseCase::new(cfg.clone()).with_source(source);
        uc.execute().unwrap();

        assert!(cfg.raw_data_path.is_file());
        assert!(cfg.train_data_path.is_file());
        assert!(cfg.test_data_path.is_file());
    }
}
