//! # Knowledge Ingestor Shared
//!
//! Shared types and data structures for the knowledge ingestor system.
//!
//! This crate defines the domain types that flow between the ingestor and
//! the document store repository: log entries, their persisted document
//! form, and the namespaced collection path they are written under.

pub mod document;
pub mod entry;
pub mod path;

pub use document::{StoredDocument, TimestampField};
pub use entry::LogEntry;
pub use path::CollectionPath;
