//! Configuration types for the Firestore client.

/// Default Firestore REST endpoint.
const DEFAULT_ENDPOINT: &str = "https://firestore.googleapis.com";

/// Default database id within a project.
const DEFAULT_DATABASE: &str = "(default)";

/// Configuration for the Firestore client.
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    /// REST endpoint base URL. Override when targeting an emulator.
    pub endpoint: String,
    /// GCP project id. Falls back to the service account key's project.
    pub project_id: Option<String>,
    /// Database id within the project.
    pub database: String,
    /// Service account key path. Falls back to the
    /// `GOOGLE_APPLICATION_CREDENTIALS` environment variable.
    pub credentials_path: Option<String>,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            project_id: None,
            database: DEFAULT_DATABASE.to_string(),
            credentials_path: None,
        }
    }
}

impl FirestoreConfig {
    /// Create a config targeting a specific project.
    pub fn with_project(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            ..Default::default()
        }
    }
}
