//! Synthetic document and archive generation.

mod archive_builder;
mod document;

pub use archive_builder::{build_archive, generate_archives, GenerationPlan};
pub use document::{Document, DocumentFactory, ObjectEntry, MAX_LEVEL, MAX_OBJECTS, MIN_OBJECTS};

#[cfg(test)]
#[path = "tests/generator_tests.rs"]
mod tests;
