use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How the tabular writer treats existing CSV files.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Append rows; the header is written only into a new or empty file.
    #[default]
    Append,
    /// Rewrite both files from scratch.
    Truncate,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PipelineSettings {
    pub zip_dir: PathBuf,
    pub csv_dir: PathBuf,
    pub archive_count: usize,
    pub documents_per_archive: usize,
    /// Pin every document to this many objects instead of a random 1..=10.
    pub objects_per_document: Option<usize>,
    /// RNG seed for reproducible object names and levels.
    pub seed: Option<u64>,
    /// Worker pool size. `None` means available parallelism.
    pub workers: Option<usize>,
    pub write_mode: WriteMode,
    /// Keep the previous run's CSV directory instead of recreating it.
    pub keep_outputs: bool,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            zip_dir: PathBuf::from("zip_dir"),
            csv_dir: PathBuf::from("csv_dir"),
            archive_count: 50,
            documents_per_archive: 100,
            objects_per_document: None,
            seed: None,
            workers: None,
            write_mode: WriteMode::Append,
            keep_outputs: false,
        }
    }
}
