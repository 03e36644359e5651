//! Fans per-archive extraction out over a worker pool and folds the results.

mod pipeline;
mod timer;

pub use pipeline::{aggregate_directory, fold_outcomes, process_archive, resolve_workers};
pub use timer::ScopedTimer;

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
