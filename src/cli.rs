use crate::services::config::{self, PipelineSettings, WriteMode};
use crate::types::PipelineError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ziptab")]
#[command(about = "Generate XML-in-ZIP archives and flatten them into CSV tables")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub overrides: SettingsArgs,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Recreate the zip directory and generate archives
    Generate,
    /// Parse the zip directory into csv_1.csv and csv_2.csv
    Parse,
    /// Generate, then parse (default)
    Run,
}

/// Flags that override values loaded from the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// JSON settings file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the effective settings to FILE before running
    #[arg(long, global = true, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    #[arg(long, global = true, value_name = "DIR")]
    pub zip_dir: Option<PathBuf>,

    #[arg(long, global = true, value_name = "DIR")]
    pub csv_dir: Option<PathBuf>,

    /// Number of archives to generate
    #[arg(long, global = true)]
    pub archives: Option<usize>,

    #[arg(long, global = true)]
    pub documents_per_archive: Option<usize>,

    /// Fixed object count per document (1-10)
    #[arg(long, global = true)]
    pub objects_per_document: Option<usize>,

    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Worker pool size (defaults to available parallelism)
    #[arg(short = 'j', long, global = true)]
    pub workers: Option<usize>,

    /// Rewrite CSV files instead of appending
    #[arg(long, global = true, conflicts_with = "append")]
    pub truncate: bool,

    #[arg(long, global = true)]
    pub append: bool,

    /// Do not recreate the CSV directory before parsing
    #[arg(long, global = true)]
    pub keep_outputs: bool,
}

impl SettingsArgs {
    /// Defaults, then `--config`, then flags. Saves the result when
    /// `--save-config` is given.
    pub fn resolve_settings(&self) -> Result<PipelineSettings, PipelineError> {
        let base = match &self.config {
            Some(path) => config::load_settings(path)?,
            None => PipelineSettings::default(),
        };
        let settings = self.apply(base);
        if let Some(path) = &self.save_config {
            config::save_settings(path, &settings)?;
        }
        Ok(settings)
    }

    /// Apply CLI flags on top of file/default settings.
    pub fn apply(&self, mut settings: PipelineSettings) -> PipelineSettings {
        if let Some(dir) = &self.zip_dir {
            settings.zip_dir = dir.clone();
        }
        if let Some(dir) = &self.csv_dir {
            settings.csv_dir = dir.clone();
        }
        if let Some(n) = self.archives {
            settings.archive_count = n;
        }
        if let Some(n) = self.documents_per_archive {
            settings.documents_per_archive = n;
        }
        if self.objects_per_document.is_some() {
            settings.objects_per_document = self.objects_per_document;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if self.workers.is_some() {
            settings.workers = self.workers;
        }
        if self.truncate {
            settings.write_mode = WriteMode::Truncate;
        } else if self.append {
            settings.write_mode = WriteMode::Append;
        }
        if self.keep_outputs {
            settings.keep_outputs = true;
        }
        settings
    }
}

#[cfg(test)]
#[path = "tests/cli_tests.rs"]
mod tests;
