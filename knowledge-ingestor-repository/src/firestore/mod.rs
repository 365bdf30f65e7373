//! Firestore implementation of the document store client.
//!
//! This module provides a concrete implementation of `DocumentStoreClient`
//! against the Firestore REST API, including service account authentication
//! and the tagged value encoding the API expects.

mod auth;
mod client;
mod config;
mod value;

pub use client::FirestoreClient;
pub use config::FirestoreConfig;
