use super::document::{Document, DocumentFactory};
use crate::services::workspace;
use crate::types::PipelineError;
use rand::Rng;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;

/// How many archives and documents a generation run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationPlan {
    pub archive_count: usize,
    pub documents_per_archive: usize,
}

/// Write `documents` into a new ZIP at `archive_path` as `0.xml`, `1.xml`, ...
pub fn build_archive(archive_path: &Path, documents: &[Document]) -> Result<(), PipelineError> {
    let file = fs::File::create(archive_path).map_err(|e| {
        PipelineError::Generation(format!(
            "Failed to create {}: {e}",
            archive_path.display()
        ))
    })?;

    let mut writer = zip::ZipWriter::new(file);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (idx, document) in documents.iter().enumerate() {
        let entry_name = format!("{idx}.xml");
        writer
            .start_file(entry_name.as_str(), options)
            .map_err(|e| PipelineError::Generation(format!("Failed to add {entry_name}: {e}")))?;
        writer
            .write_all(document.to_xml().as_bytes())
            .map_err(|e| PipelineError::Generation(format!("Failed to write {entry_name}: {e}")))?;
        log::debug!("xml file {entry_name} generated");
    }

    writer.finish().map_err(|e| {
        PipelineError::Generation(format!(
            "Failed to finalize {}: {e}",
            archive_path.display()
        ))
    })?;
    Ok(())
}

/// Generate `{index}.zip` archives into `zip_dir`, creating it if needed.
///
/// Returns the archive paths in index order.
pub fn generate_archives<R: Rng>(
    zip_dir: &Path,
    plan: GenerationPlan,
    factory: &mut DocumentFactory<R>,
) -> Result<Vec<PathBuf>, PipelineError> {
    workspace::ensure_dir(zip_dir)?;

    let mut paths = Vec::with_capacity(plan.archive_count);
    for zip_idx in 0..plan.archive_count {
        let documents: Vec<Document> = (0..plan.documents_per_archive)
            .map(|_| factory.next_document())
            .collect();

        let path = zip_dir.join(format!("{zip_idx}.zip"));
        build_archive(&path, &documents)?;
        log::debug!("zip archive #{zip_idx} generated");
        paths.push(path);
    }

    log::info!("{} zip archives generated", plan.archive_count);
    Ok(paths)
}
