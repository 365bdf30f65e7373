//! Interface definitions for the document store client.
//!
//! This module defines the abstract `DocumentStoreClient` trait that allows
//! for dependency injection and swappable store backend implementations.

mod document_store_client;

pub use document_store_client::DocumentStoreClient;
