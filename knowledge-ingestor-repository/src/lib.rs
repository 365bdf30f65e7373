//! # Knowledge Ingestor Repository
//!
//! This crate provides traits and implementations for interacting with the
//! document store. It includes definitions for errors, interfaces, and a
//! concrete implementation for Firestore.

pub mod errors;
pub mod firestore;
pub mod interfaces;

pub use errors::StoreError;
pub use firestore::{FirestoreClient, FirestoreConfig};
pub use interfaces::DocumentStoreClient;
