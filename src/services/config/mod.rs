pub mod models;

pub use models::*;

use crate::types::PipelineError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Read settings strictly: a missing file yields defaults, a present but
/// unreadable one is an error.
pub fn load_settings(path: &Path) -> Result<PipelineSettings, PipelineError> {
    if !path.exists() {
        log::debug!("No config at {}, using defaults", path.display());
        return Ok(PipelineSettings::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        PipelineError::Configuration(format!("Failed to read {}: {e}", path.display()))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        PipelineError::Configuration(format!("Invalid config {}: {e}", path.display()))
    })
}

/// Persist settings atomically (temp file in the same directory, then rename).
pub fn save_settings(path: &Path, settings: &PipelineSettings) -> Result<(), PipelineError> {
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| PipelineError::Configuration(e.to_string()))?;

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)
        .map_err(|e| PipelineError::Configuration(format!("Failed to create config dir: {e}")))?;

    let mut tmp = tempfile::NamedTempFile::new_in(&parent)
        .map_err(|e| PipelineError::Configuration(format!("Failed to stage config: {e}")))?;
    tmp.write_all(json.as_bytes())
        .map_err(|e| PipelineError::Configuration(format!("Failed to write config: {e}")))?;
    tmp.persist(path)
        .map_err(|e| PipelineError::Configuration(format!("Failed to persist config: {e}")))?;

    log::info!("Saved settings to {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
