use crate::services::config::WriteMode;
use crate::services::workspace;
use crate::types::{AggregatedTables, PipelineError};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

pub const PARENT_FILE: &str = "csv_1.csv";
pub const CHILD_FILE: &str = "csv_2.csv";
pub const PARENT_HEADER: [&str; 2] = ["id", "level"];
pub const CHILD_HEADER: [&str; 2] = ["id", "object_name"];

/// Paths and row counts of the written tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOutputs {
    pub parent_path: PathBuf,
    pub child_path: PathBuf,
    pub parent_rows: usize,
    pub child_rows: usize,
}

/// Write `csv_1.csv` and `csv_2.csv` into `csv_dir`, creating it if absent.
pub fn write_tables(
    csv_dir: &Path,
    tables: &AggregatedTables,
    mode: WriteMode,
) -> Result<TableOutputs, PipelineError> {
    workspace::ensure_dir(csv_dir)
        .map_err(|e| PipelineError::Output(format!("Cannot prepare output dir: {e}")))?;

    let parent_path = csv_dir.join(PARENT_FILE);
    let child_path = csv_dir.join(CHILD_FILE);

    write_table(&parent_path, &PARENT_HEADER, &tables.parents, mode)?;
    log::info!("{PARENT_FILE} written ({} rows)", tables.parents.len());

    write_table(&child_path, &CHILD_HEADER, &tables.children, mode)?;
    log::info!("{CHILD_FILE} written ({} rows)", tables.children.len());

    Ok(TableOutputs {
        parent_path,
        child_path,
        parent_rows: tables.parents.len(),
        child_rows: tables.children.len(),
    })
}

/// Write one table. In append mode the header only goes into an empty file.
pub fn write_table<T: Serialize>(
    path: &Path,
    header: &[&str],
    rows: &[T],
    mode: WriteMode,
) -> Result<(), PipelineError> {
    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        WriteMode::Append => options.append(true),
        WriteMode::Truncate => options.write(true).truncate(true),
    };
    let file = options.open(path).map_err(|e| output_error(path, e))?;

    let needs_header = fs::metadata(path).map_err(|e| output_error(path, e))?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(b',')
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);

    if needs_header {
        writer.write_record(header).map_err(|e| output_error(path, e))?;
    }
    for row in rows {
        writer.serialize(row).map_err(|e| output_error(path, e))?;
    }
    writer.flush().map_err(|e| output_error(path, e))?;

    Ok(())
}

fn output_error(path: &Path, error: impl std::fmt::Display) -> PipelineError {
    PipelineError::Output(format!("Failed to write {}: {error}", path.display()))
}
