//! Firestore client implementation.
//!
//! This module provides the concrete implementation of `DocumentStoreClient`
//! using the Firestore REST API.

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error, info};
use url::Url;

use super::auth::GcpAuth;
use super::config::FirestoreConfig;
use super::value::encode_document;
use crate::errors::StoreError;
use crate::interfaces::DocumentStoreClient;
use knowledge_ingestor_shared::{StoredDocument, TimestampField};

/// Probe document fetched by the health check. It does not need to exist;
/// a 404 still proves the database is reachable and the caller authorized.
const HEALTH_PROBE_PATH: &str = "artifacts/__health__";

/// Firestore document store client.
///
/// Writes documents through the REST `documents:commit` endpoint. Each
/// upsert is a single write containing the full field map (a full
/// overwrite) plus a transform that sets `indexed_at` to the server's
/// clock at commit time.
///
/// # Example
///
/// ```ignore
/// let client = FirestoreClient::connect(FirestoreConfig::default()).await?;
/// client.upsert_document(&path, &document).await?;
/// ```
pub struct FirestoreClient {
    http: reqwest::Client,
    auth: GcpAuth,
    endpoint: Url,
    /// `projects/{project}/databases/{database}/documents`
    documents_root: String,
}

impl FirestoreClient {
    /// Construct a client using ambient credential discovery.
    ///
    /// # Returns
    ///
    /// * `Ok(FirestoreClient)` - A ready client
    /// * `Err(StoreError::CredentialsMissing)` - No usable credentials
    /// * `Err(StoreError::ConnectionError)` - Any other construction failure
    pub async fn connect(config: FirestoreConfig) -> Result<Self, StoreError> {
        let auth = GcpAuth::discover(config.credentials_path.as_deref()).await?;

        let project_id = config
            .project_id
            .clone()
            .or_else(|| auth.project_id().map(str::to_string))
            .ok_or_else(|| {
                StoreError::connection(
                    "no project id in config or service account key".to_string(),
                )
            })?;

        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| StoreError::connection(format!("invalid endpoint: {}", e)))?;

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| StoreError::connection(e.to_string()))?;

        let documents_root = format!(
            "projects/{}/databases/{}/documents",
            project_id, config.database
        );

        info!(
            endpoint = %endpoint,
            project_id = %project_id,
            database = %config.database,
            "Created Firestore client"
        );

        Ok(Self {
            http,
            auth,
            endpoint,
            documents_root,
        })
    }

    /// Fully qualified document name for a path relative to the database root.
    fn document_name(&self, path: &str) -> String {
        format!("{}/{}", self.documents_root, path)
    }

    fn commit_url(&self) -> String {
        format!(
            "{}/v1/{}:commit",
            self.endpoint.as_str().trim_end_matches('/'),
            self.documents_root
        )
    }

    fn document_url(&self, path: &str) -> String {
        format!(
            "{}/v1/{}",
            self.endpoint.as_str().trim_end_matches('/'),
            self.document_name(path)
        )
    }

    /// Build the commit request body for one upsert.
    ///
    /// The write's `update` carries the full field map, which replaces any
    /// existing document at the name. A server-set `indexed_at` becomes an
    /// `updateTransforms` entry resolved by the store at commit time.
    fn build_commit_body(document_name: &str, document: &StoredDocument) -> serde_json::Value {
        let mut write = json!({
            "update": {
                "name": document_name,
                "fields": encode_document(document),
            }
        });

        if document.indexed_at == TimestampField::ServerSet {
            write["updateTransforms"] = json!([{
                "fieldPath": "indexed_at",
                "setToServerTime": "REQUEST_TIME",
            }]);
        }

        json!({ "writes": [write] })
    }
}

#[async_trait]
impl DocumentStoreClient for FirestoreClient {
    async fn upsert_document(
        &self,
        path: &str,
        document: &StoredDocument,
    ) -> Result<(), StoreError> {
        if path.is_empty() {
            return Err(StoreError::validation("document path is empty"));
        }

        let name = self.document_name(path);
        let body = Self::build_commit_body(&name, document);
        let token = self.auth.access_token().await?;

        let response = self
            .http
            .post(self.commit_url())
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::write(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Commit request failed");
            return Err(StoreError::write(format!(
                "commit failed with status {}: {}",
                status, error_body
            )));
        }

        debug!(name = %name, "Document upserted");
        Ok(())
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        let token = self.auth.access_token().await?;

        let response = self
            .http
            .get(self.document_url(HEALTH_PROBE_PATH))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| StoreError::connection(e.to_string()))?;

        let status = response.status();
        match status.as_u16() {
            200 | 404 => Ok(true),
            401 | 403 => Err(StoreError::connection(format!(
                "store rejected credentials with status {}",
                status
            ))),
            _ => Ok(false),
        }
    }
}
