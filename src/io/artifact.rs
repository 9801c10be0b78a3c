//! Model artifact loading.
//!
//! The core does not locate or train artifacts; this module is the thin
//! boundary that turns a JSON file (produced by the external trainer) into a
//! `ModelArtifact` value at process start.
//!
//! Resolution order:
//! 1. explicit `--artifact PATH` flag: must load, failure is fatal
//! 2. `CREDIT_MODEL_PATH` from the environment / `.env`: failure degrades
//!    to fallback-only mode with a stderr notice (the service must keep
//!    serving even with a missing or corrupted artifact)
//! 3. neither set: fallback-only mode

use std::fs::File;
use std::path::Path;

use crate::error::AppError;
use crate::model::ModelArtifact;

pub const MODEL_PATH_ENV: &str = "CREDIT_MODEL_PATH";

/// Read and parse an artifact JSON file.
pub fn read_artifact_json(path: &Path) -> Result<ModelArtifact, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::config(format!(
            "Failed to open model artifact '{}': {e}",
            path.display()
        ))
    })?;
    let artifact: ModelArtifact = serde_json::from_reader(file)
        .map_err(|e| AppError::config(format!("Invalid model artifact JSON: {e}")))?;
    Ok(artifact)
}

/// Resolve the artifact for this process, honoring the degraded-mode
/// contract: `Ok(None)` means "serve via the fallback estimator".
pub fn load_artifact(explicit: Option<&Path>) -> Result<Option<ModelArtifact>, AppError> {
    if let Some(path) = explicit {
        return read_artifact_json(path).map(Some);
    }

    dotenvy::dotenv().ok();
    let Ok(path) = std::env::var(MODEL_PATH_ENV) else {
        return Ok(None);
    };

    match read_artifact_json(Path::new(&path)) {
        Ok(artifact) => Ok(Some(artifact)),
        Err(e) => {
            eprintln!("warning: {e}; serving via fallback estimator");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_path(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("cscore-artifact-{tag}-{}.json", std::process::id()))
    }

    #[test]
    fn artifact_json_round_trips() {
        let json = r#"{
            "features": ["age", "income"],
            "weights": [0.1, -0.2],
            "bias": -1.5,
            "scaler": {"income": {"min": 0.0, "max": 1000000.0}},
            "cols_to_scale": ["income"],
            "version": "2026-07"
        }"#;
        let path = temp_path("roundtrip");
        let mut file = File::create(&path).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let artifact = read_artifact_json(&path).unwrap();
        assert_eq!(artifact.features, vec!["age", "income"]);
        assert_eq!(artifact.weights, vec![0.1, -0.2]);
        assert_eq!(artifact.bias, -1.5);
        assert_eq!(artifact.cols_to_scale, vec!["income"]);
        assert_eq!(artifact.version.as_deref(), Some("2026-07"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn optional_sections_default_to_empty() {
        let json = r#"{"features": ["age"], "weights": [0.5], "bias": 0.0}"#;
        let path = temp_path("minimal");
        let mut file = File::create(&path).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let artifact = read_artifact_json(&path).unwrap();
        assert!(artifact.scaler.is_empty());
        assert!(artifact.cols_to_scale.is_empty());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn explicit_missing_path_is_fatal() {
        let err = load_artifact(Some(Path::new("/nonexistent/model.json"))).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let path = temp_path("malformed");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"{not json").unwrap();
        assert!(read_artifact_json(&path).is_err());
        std::fs::remove_file(&path).ok();
    }
}
