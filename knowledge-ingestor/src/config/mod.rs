//! Configuration and dependency wiring for the ingestor.

mod dependencies;
mod ingest_config;

pub use dependencies::Dependencies;
pub use ingest_config::IngestConfig;
