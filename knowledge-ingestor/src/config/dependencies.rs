//! Dependency initialization and wiring for the ingestor.

use std::sync::Arc;
use tracing::info;

use crate::config::IngestConfig;
use crate::ingestor::Ingestor;
use crate::IngestorError;
use knowledge_ingestor_repository::{DocumentStoreClient, FirestoreClient, FirestoreConfig};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured ingestor ready to run.
    pub ingestor: Ingestor,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `__app_id`: tenant/application namespace (default: `default-app-id`)
    /// - `USER_ID`: identifies the writing user (default: `jasonbender-c3x`)
    /// - `GOOGLE_APPLICATION_CREDENTIALS`: service account key for the store
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IngestorError)` - If the store client cannot be constructed
    ///   or the store is unreachable
    pub async fn new() -> Result<Self, IngestorError> {
        let config = IngestConfig::from_env();

        info!(
            app_id = %config.app_id,
            user_id = %config.user_id,
            collection_path = %config.collection_path,
            "Initializing dependencies"
        );

        let store_client = FirestoreClient::connect(FirestoreConfig::default()).await?;

        // Verify the store is reachable before accepting any entries
        let healthy = store_client.health_check().await?;
        if !healthy {
            return Err(IngestorError::config("document store is unhealthy"));
        }

        info!("Firestore connection verified");

        let ingestor = Ingestor::new(Arc::new(store_client), config);

        Ok(Self { ingestor })
    }
}
