use super::timer::ScopedTimer;
use crate::services::archive::{self, EmbeddedDocument};
use crate::services::extractor;
use crate::types::{
    AggregatedTables, ArchiveOutcome, BatchSummary, DocumentError, DocumentFailure, DocumentRows,
    PipelineError,
};
use rayon::prelude::*;
use std::path::Path;

/// Extract every document of one archive.
///
/// A malformed document is logged and recorded, and the remaining documents
/// still contribute rows. Only archive-level read failures return `Err`.
pub fn process_archive(path: &Path) -> Result<ArchiveOutcome, PipelineError> {
    let archive_name = archive::display_name(path);
    let documents = archive::read_documents(path)?;

    let mut outcome = ArchiveOutcome::new(archive_name.as_str());
    outcome.documents_total = documents.len();

    for document in &documents {
        match extract_embedded(document) {
            Ok(rows) => outcome.push(rows),
            Err(e) => {
                let error = e.in_archive(&archive_name, &document.name);
                log::warn!("{error}");
                outcome.failures.push(DocumentFailure {
                    document: document.name.clone(),
                    reason: error.to_string(),
                });
            }
        }
    }

    Ok(outcome)
}

fn extract_embedded(document: &EmbeddedDocument) -> Result<DocumentRows, DocumentError> {
    let text = document.text()?;
    extractor::extract_document(text)
}

/// Resolve the worker count: explicit value, else available parallelism.
pub fn resolve_workers(workers: Option<usize>) -> Result<usize, PipelineError> {
    match workers {
        Some(0) => Err(PipelineError::Configuration(
            "Worker count must be at least 1".to_string(),
        )),
        Some(n) => Ok(n),
        None => Ok(std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)),
    }
}

/// Process every valid archive in `zip_dir` on a bounded worker pool and
/// flatten the results into the two global row sequences.
pub fn aggregate_directory(
    zip_dir: &Path,
    workers: Option<usize>,
) -> Result<AggregatedTables, PipelineError> {
    let _timer = ScopedTimer::start("aggregate_directory");

    let candidates = archive::list_candidates(zip_dir)?;
    let archives_seen = candidates.len();
    let (valid, skipped) = archive::classify_candidates(candidates);

    let worker_count = resolve_workers(workers)?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(worker_count)
        .thread_name(|i| format!("ziptab-worker-{i}"))
        .build()
        .map_err(|e| PipelineError::Configuration(format!("Failed to build worker pool: {e}")))?;

    log::info!(
        "Processing {} archives ({} skipped) on {worker_count} workers",
        valid.len(),
        skipped.len()
    );

    let results: Vec<Result<ArchiveOutcome, PipelineError>> =
        pool.install(|| valid.par_iter().map(|path| process_archive(path)).collect());

    let mut tables = fold_outcomes(results);
    tables.summary.archives_seen = archives_seen;
    tables.summary.archives_skipped = skipped.len();

    log_summary(&tables.summary);
    Ok(tables)
}

/// Single-threaded reduction of per-archive results, in the given order.
pub fn fold_outcomes(results: Vec<Result<ArchiveOutcome, PipelineError>>) -> AggregatedTables {
    let mut tables = AggregatedTables::default();

    for result in results {
        match result {
            Ok(outcome) => {
                let summary = &mut tables.summary;
                summary.archives_processed += 1;
                summary.documents_extracted += outcome.parents.len();
                summary.documents_failed += outcome.failures.len();

                tables.parents.extend(outcome.parents);
                tables.children.extend(outcome.children);
            }
            Err(e) => {
                log::error!("{e}");
                tables.summary.archives_failed += 1;
            }
        }
    }

    tables
}

fn log_summary(summary: &BatchSummary) {
    let line = format!(
        "archives: {} seen, {} processed, {} skipped, {} failed; documents: {} extracted, {} malformed",
        summary.archives_seen,
        summary.archives_processed,
        summary.archives_skipped,
        summary.archives_failed,
        summary.documents_extracted,
        summary.documents_failed
    );

    if summary.has_failures() {
        log::warn!("Batch finished with failures: {line}");
    } else {
        log::info!("Batch finished: {line}");
    }
}
