//! Error types for the knowledge ingestor repository.

mod store_error;

pub use store_error::StoreError;
