//! Batch operations exposed to the CLI: generate archives, build tables, or both.

use crate::services::aggregator;
use crate::services::archive;
use crate::services::config::PipelineSettings;
use crate::services::generator::{self, DocumentFactory, GenerationPlan};
use crate::services::tabular::{self, TableOutputs};
use crate::services::workspace;
use crate::types::{BatchSummary, CommandResult};
use std::path::PathBuf;

/// Result of a table build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub outputs: TableOutputs,
    pub summary: BatchSummary,
}

/// Recreate `zip_dir` and fill it with freshly generated archives.
pub fn generate_archives_cmd(settings: &PipelineSettings) -> CommandResult<Vec<PathBuf>> {
    workspace::reset_dir(&settings.zip_dir)?;

    let mut factory = match settings.seed {
        Some(seed) => DocumentFactory::seeded(seed),
        None => DocumentFactory::from_entropy(),
    };
    if let Some(count) = settings.objects_per_document {
        factory = factory.with_fixed_objects(count);
    }

    let plan = GenerationPlan {
        archive_count: settings.archive_count,
        documents_per_archive: settings.documents_per_archive,
    };
    Ok(generator::generate_archives(
        &settings.zip_dir,
        plan,
        &mut factory,
    )?)
}

/// Parse every archive in `zip_dir` and write both CSV tables into `csv_dir`.
///
/// Unless `keep_outputs` is set, `csv_dir` is recreated first so append mode
/// never accumulates rows from a previous run. Configuration is validated
/// before that, so a bad invocation leaves earlier outputs in place.
pub fn build_tables_cmd(settings: &PipelineSettings) -> CommandResult<BuildReport> {
    aggregator::resolve_workers(settings.workers)?;
    archive::list_candidates(&settings.zip_dir)?;

    if settings.keep_outputs {
        workspace::ensure_dir(&settings.csv_dir)?;
    } else {
        workspace::reset_dir(&settings.csv_dir)?;
    }

    let tables = aggregator::aggregate_directory(&settings.zip_dir, settings.workers)?;
    let outputs = tabular::write_tables(&settings.csv_dir, &tables, settings.write_mode)?;

    Ok(BuildReport {
        outputs,
        summary: tables.summary,
    })
}

/// Generate, then build tables.
pub fn run_batch_cmd(settings: &PipelineSettings) -> CommandResult<BuildReport> {
    // Reject a bad worker count before touching the filesystem
    aggregator::resolve_workers(settings.workers)?;
    generate_archives_cmd(settings)?;
    build_tables_cmd(settings)
}

#[cfg(test)]
#[path = "tests/batch_cmds_tests.rs"]
mod tests;
