//! Enumerates candidate archives and reads their embedded documents.

mod reader;

pub use reader::{
    classify_candidates, display_name, is_valid_archive, list_candidates, read_documents,
    EmbeddedDocument,
};

#[cfg(test)]
#[path = "tests/reader_tests.rs"]
mod tests;
