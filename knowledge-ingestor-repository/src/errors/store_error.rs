//! Document store error types.
//!
//! This module defines the error types that can occur during document store
//! operations.

use thiserror::Error;

/// Errors that can occur during document store operations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No usable credentials for constructing the store client. The message
    /// includes the remediation hint shown to the operator.
    #[error("Credentials missing: {0}. Set GOOGLE_APPLICATION_CREDENTIALS to a service account key file")]
    CredentialsMissing(String),

    /// Failed to construct or reach the store client.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// A document write failed.
    #[error("Write error: {0}")]
    WriteError(String),

    /// Failed to serialize a document for the store.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Failed to parse a response from the store.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid input (e.g. an empty document path).
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl StoreError {
    /// Create a credentials-missing error.
    pub fn credentials_missing(msg: impl Into<String>) -> Self {
        Self::CredentialsMissing(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a write error.
    pub fn write(msg: impl Into<String>) -> Self {
        Self::WriteError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
