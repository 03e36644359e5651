//! Input/output directory preparation. Runs once, before any worker starts.

use crate::types::PipelineError;
use std::fs;
use std::path::Path;

/// Remove `path` (if present) and recreate it empty.
pub fn reset_dir(path: &Path) -> Result<(), PipelineError> {
    if path.is_file() {
        return Err(PipelineError::Configuration(format!(
            "Expected a directory but found a file: {}",
            path.display()
        )));
    }

    if path.exists() {
        fs::remove_dir_all(path).map_err(|e| {
            PipelineError::Configuration(format!("Failed to clear {}: {e}", path.display()))
        })?;
        log::debug!("Cleared {}", path.display());
    }

    ensure_dir(path)
}

/// Create `path` if absent. Existing contents are left alone.
pub fn ensure_dir(path: &Path) -> Result<(), PipelineError> {
    if path.is_dir() {
        return Ok(());
    }

    if path.exists() {
        return Err(PipelineError::Configuration(format!(
            "Expected a directory but found a file: {}",
            path.display()
        )));
    }

    fs::create_dir_all(path).map_err(|e| {
        PipelineError::Configuration(format!("Failed to create {}: {e}", path.display()))
    })
}

#[cfg(test)]
#[path = "tests/workspace_tests.rs"]
mod tests;
