//! # Knowledge Ingestor
//!
//! Main library for the knowledge bucket ingestor.
//!
//! This crate provides the entry point and configuration for writing log
//! entries into the namespaced knowledge bucket collection of the document
//! store.

pub mod config;
pub mod ingestor;

pub use config::{Dependencies, IngestConfig};
pub use ingestor::{IngestSummary, Ingestor};

use thiserror::Error;

/// Errors that can occur during ingestor initialization or execution.
#[derive(Error, Debug)]
pub enum IngestorError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Store error.
    #[error("Store error: {0}")]
    StoreError(#[from] knowledge_ingestor_repository::StoreError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl IngestorError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
