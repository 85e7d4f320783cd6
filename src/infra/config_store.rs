// ============================================================
// Layer 6 — Config Store
// ============================================================
// Saves and loads IngestionConfig as pretty-printed JSON.
//
// Example file:
//   {
//     "raw_data_path": "artifacts/data.csv",
//     "train_data_path": "artifacts/train.csv",
//     "test_data_path": "artifacts/test.csv"
//   }
//
// Keys missing from the file keep their default values, so a
// file containing only "test_data_path" is valid.
//
// Reference: serde_json documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::application::ingest_use_case::IngestionConfig;

/// Write `cfg` to `path`, creating parent directories as needed.
pub fn save_config(cfg: &IngestionConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(cfg)?;

    fs::write(path, json)
        .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

    tracing::debug!("Saved ingestion config to '{}'", path.display());
    Ok(())
}

/// Read an IngestionConfig from a JSON file.
pub fn load_config(path: &Path) -> Result<IngestionConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    let cfg = serde_json::from_str(&json)
        .with_context(|| format!("Invalid ingestion config in '{}'", path.display()))?;

    tracing::debug!("Loaded ingestion config from '{}'", path.display());
    Ok(cfg)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_saved_default_loads_back() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("ingestion.json");

        save_config(&IngestionConfig::default(), &path).unwrap();
        assert_eq!(load_config(&path).unwrap(), IngestionConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("ingestion.json");
        fs::write(&path, r#"{ "test_data_path": "elsewhere/holdout.csv" }"#).unwrap();

        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.test_data_path, PathBuf::from("elsewhere/holdout.csv"));
        assert_eq!(cfg.train_data_path, IngestionConfig::default().train_data_path);
        assert_eq!(cfg.raw_data_path, IngestionConfig::default().raw_data_path);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("ingestion.json");
        fs::write(&path, "not json").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid ingestion config"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_config(&dir.path().join("absent.json")).is_err());
    }
}
