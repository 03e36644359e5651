use anyhow::Context;
use clap::Parser;

pub mod cli;
pub mod commands;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

use cli::{Cli, Command};
use commands::batch_cmds::{self, BuildReport};

/// Entry point of the `ziptab` binary.
pub fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = cli
        .overrides
        .resolve_settings()
        .context("Failed to resolve settings")?;
    log::debug!("Effective settings: {settings:?}");

    match cli.command.unwrap_or(Command::Run) {
        Command::Generate => {
            batch_cmds::generate_archives_cmd(&settings).context("Archive generation failed")?;
        }
        Command::Parse => {
            let report = batch_cmds::build_tables_cmd(&settings).context("Table build failed")?;
            log_report(&report);
        }
        Command::Run => {
            let report = batch_cmds::run_batch_cmd(&settings).context("Batch run failed")?;
            log_report(&report);
        }
    }

    Ok(())
}

fn log_report(report: &BuildReport) {
    log::info!(
        "Wrote {} rows to {} and {} rows to {}",
        report.outputs.parent_rows,
        report.outputs.parent_path.display(),
        report.outputs.child_rows,
        report.outputs.child_path.display()
    );
}
