//! JSON export of a finished analysis.

use bayes_cipher::errors::BayesCipherError;
use bayes_cipher::{Analysis, AnalysisConfig, CipherSystem};
use chrono::{DateTime, Local};
use serde::Serialize;

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
pub struct AnalysisExport<'a> {
    pub generated_at: DateTime<Local>,
    pub config: &'a AnalysisConfig,
    pub system: &'a CipherSystem,
    pub analysis: &'a Analysis,
}

/// Writes `analysis_<timestamp>.json` into `dir` and returns its path.
pub fn write_analysis(
    dir: &Path,
    config: &AnalysisConfig,
    system: &CipherSystem,
    analysis: &Analysis,
) -> Result<PathBuf, BayesCipherError> {
    let now = Local::now();
    let path = dir.join(format!("analysis_{}.json", now.format("%Y%m%d_%H%M%S")));

    let export = AnalysisExport {
        generated_at: now,
        config,
        system,
        analysis,
    };
    let json = serde_json::to_string_pretty(&export)?;

    fs::create_dir_all(dir)?;
    fs::write(&path, json)?;
    log::info!("analysis exported to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bayes_cipher::preset::DEMO;

    #[test]
    fn test_write_analysis() {
        let dir = std::env::temp_dir().join(format!("bayes-cli-export-{}", std::process::id()));
        let config = AnalysisConfig::default();
        let analysis = Analysis::run(&DEMO, &config).unwrap();

        let path = write_analysis(&dir, &config, &DEMO, &analysis).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("analysis_") && name.ends_with(".json"));

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["config"]["unreachable"], "fail");
        assert_eq!(value["analysis"]["n"], 20);
        let restored: Analysis = serde_json::from_value(value["analysis"].clone()).unwrap();
        assert_eq!(restored.deterministic_rule, analysis.deterministic_rule);

        fs::remove_dir_all(&dir).unwrap();
    }
}
