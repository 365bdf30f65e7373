//! Document store client trait definition.
//!
//! This module defines the abstract interface for document store operations,
//! allowing for different backend implementations (Firestore, in-memory
//! fakes, etc.).

use async_trait::async_trait;

use crate::errors::StoreError;
use knowledge_ingestor_shared::StoredDocument;

/// Abstract interface for document store operations.
///
/// The surface is deliberately narrow: a full-document upsert at a path and
/// a health check. Keeping the trait this small lets tests substitute an
/// in-memory fake store without pulling in any cloud client machinery.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// All methods return `Result<T, StoreError>` for consistent error handling.
#[async_trait]
pub trait DocumentStoreClient: Send + Sync {
    /// Upsert a document at the given path.
    ///
    /// `path` is `{collection_path}/{message_id}` relative to the database
    /// root. If a document already exists at the path it is fully
    /// overwritten; there is no partial update or versioning.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the document was written successfully
    /// * `Err(StoreError)` - If the write fails
    async fn upsert_document(
        &self,
        path: &str,
        document: &StoredDocument,
    ) -> Result<(), StoreError>;

    /// Check whether the store is reachable and accepts requests.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the store is reachable
    /// * `Ok(false)` - If the store responded but is unhealthy
    /// * `Err(StoreError)` - If the check failed to execute
    async fn health_check(&self) -> Result<bool, StoreError>;
}
