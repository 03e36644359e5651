pub mod errors;
pub mod rows;

pub use errors::{CommandError, CommandResult, DocumentError, PipelineError};
pub use rows::{
    AggregatedTables, ArchiveOutcome, BatchSummary, ChildRow, DocumentFailure, DocumentRows,
    ParentRow,
};
