use std::path::PathBuf;
use thiserror::Error;

/// Failure taxonomy of the generate/parse batch.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Target directories are missing, not directories, or cannot be created.
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// A candidate input file is not a readable ZIP archive.
    #[error("Invalid archive: {}", .0.display())]
    InvalidArchive(PathBuf),
    /// One document inside an otherwise valid archive could not be extracted.
    #[error("Malformed document '{document}' in archive '{archive}': {reason}")]
    MalformedDocument {
        archive: String,
        document: String,
        reason: String,
    },
    /// An archive-level failure inside a worker (open/read error after validation).
    #[error("Worker failed on archive '{archive}': {reason}")]
    WorkerFailure { archive: String, reason: String },
    /// Writing the CSV outputs failed. Always fatal.
    #[error("Output error: {0}")]
    Output(String),
    #[error("Generation error: {0}")]
    Generation(String),
}

/// Extraction failure for a single document, without archive context.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("Document is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("Missing var '{0}'")]
    MissingVar(&'static str),
    #[error("Missing objects container")]
    MissingObjects,
    #[error("Object #{0} has no name attribute")]
    UnnamedObject(usize),
}

impl DocumentError {
    /// Attach archive/document identifiers for diagnostics.
    pub fn in_archive(self, archive: &str, document: &str) -> PipelineError {
        PipelineError::MalformedDocument {
            archive: archive.to_string(),
            document: document.to_string(),
            reason: self.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PipelineError> for CommandError {
    fn from(error: PipelineError) -> Self {
        match error {
            PipelineError::Configuration(msg) => CommandError::Configuration(msg),
            PipelineError::Output(_) | PipelineError::Generation(_) => {
                CommandError::Io(error.to_string())
            }
            other => CommandError::Internal(other.to_string()),
        }
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
