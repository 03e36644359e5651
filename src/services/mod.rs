pub mod aggregator;
pub mod archive;
pub mod config;
pub mod extractor;
pub mod generator;
pub mod tabular;
pub mod workspace;
