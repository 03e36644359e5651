//! Flattens one XML document into `ParentRow`/`ChildRow` shapes.

mod document;

pub use document::extract_document;

#[cfg(test)]
#[path = "tests/document_tests.rs"]
mod tests;
