use crate::types::PipelineError;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A file entry read out of an archive, kept as raw bytes until extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedDocument {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl EmbeddedDocument {
    pub fn text(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.bytes)
    }
}

/// List regular files directly inside `dir`.
///
/// Ordered by numeric stem (`2.zip` before `10.zip`), then by name.
pub fn list_candidates(dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    if !dir.exists() {
        return Err(PipelineError::Configuration(format!(
            "Archive directory does not exist: {}",
            dir.display()
        )));
    }
    if !dir.is_dir() {
        return Err(PipelineError::Configuration(format!(
            "Archive path is not a directory: {}",
            dir.display()
        )));
    }

    let mut candidates: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect();

    candidates.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
    Ok(candidates)
}

fn sort_key(path: &Path) -> (bool, u64, String) {
    let index = path
        .file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| s.parse::<u64>().ok());
    // Numbered archives first
    (index.is_none(), index.unwrap_or(0), display_name(path))
}

/// Content check: true when the file opens as a ZIP central directory.
pub fn is_valid_archive(path: &Path) -> bool {
    match fs::File::open(path) {
        Ok(file) => zip::ZipArchive::new(file).is_ok(),
        Err(_) => false,
    }
}

/// Split candidates into readable archives and skipped entries.
pub fn classify_candidates(candidates: Vec<PathBuf>) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let (valid, skipped): (Vec<PathBuf>, Vec<PathBuf>) =
        candidates.into_iter().partition(|p| is_valid_archive(p));

    for path in &skipped {
        log::debug!("{}", PipelineError::InvalidArchive(path.clone()));
    }

    (valid, skipped)
}

/// Upper bound on buffer pre-allocation; the declared entry size is untrusted.
const MAX_PREALLOC: u64 = 1 << 20;

pub(super) fn read_capacity(declared_size: u64) -> usize {
    usize::try_from(declared_size.min(MAX_PREALLOC)).unwrap_or(0)
}

/// Read every file entry of the archive in stored order. Directory entries are skipped.
pub fn read_documents(path: &Path) -> Result<Vec<EmbeddedDocument>, PipelineError> {
    let archive_name = display_name(path);
    let worker_err = |reason: String| PipelineError::WorkerFailure {
        archive: archive_name.clone(),
        reason,
    };

    let file = fs::File::open(path).map_err(|e| worker_err(format!("Failed to open archive: {e}")))?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| worker_err(format!("Invalid or corrupt ZIP: {e}")))?;

    let mut documents = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| worker_err(format!("Failed to read entry {i}: {e}")))?;

        if entry.is_dir() {
            continue;
        }

        let name = entry.name().to_string();
        let mut bytes = Vec::with_capacity(read_capacity(entry.size()));
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| worker_err(format!("Failed to read '{name}': {e}")))?;

        documents.push(EmbeddedDocument { name, bytes });
    }

    Ok(documents)
}

/// File name used to identify an archive in logs and summaries.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
