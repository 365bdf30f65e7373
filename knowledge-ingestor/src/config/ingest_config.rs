//! Environment configuration for the ingestor.

use std::env;

use knowledge_ingestor_shared::CollectionPath;

/// Environment variable naming the tenant/application namespace.
pub const APP_ID_ENV: &str = "__app_id";

/// Environment variable identifying the writing user.
pub const USER_ID_ENV: &str = "USER_ID";

/// Default application namespace.
const DEFAULT_APP_ID: &str = "default-app-id";

/// Default writing user.
const DEFAULT_USER_ID: &str = "jasonbender-c3x";

/// Resolved ingestor configuration.
///
/// Read once at startup and immutable thereafter. Holding the values in an
/// explicit struct (rather than re-reading the environment) keeps the run
/// deterministic and lets tests construct configs directly.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// The tenant/application namespace.
    pub app_id: String,
    /// The user documents are written on behalf of.
    pub user_id: String,
    /// The collection path derived from `app_id`.
    pub collection_path: CollectionPath,
}

impl IngestConfig {
    /// Build a config from explicit values.
    pub fn new(app_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        let app_id = app_id.into();
        let collection_path = CollectionPath::for_app(&app_id);
        Self {
            app_id,
            user_id: user_id.into(),
            collection_path,
        }
    }

    /// Resolve the config from the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `__app_id`: tenant/application namespace (default: `default-app-id`)
    /// - `USER_ID`: identifies the writing user (default: `jasonbender-c3x`)
    pub fn from_env() -> Self {
        let app_id = env::var(APP_ID_ENV).unwrap_or_else(|_| DEFAULT_APP_ID.to_string());
        let user_id = env::var(USER_ID_ENV).unwrap_or_else(|_| DEFAULT_USER_ID.to_string());
        Self::new(app_id, user_id)
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self::new(DEFAULT_APP_ID, DEFAULT_USER_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = IngestConfig::default();
        assert_eq!(config.app_id, "default-app-id");
        assert_eq!(config.user_id, "jasonbender-c3x");
        assert_eq!(
            config.collection_path.as_str(),
            "artifacts/default-app-id/public/data/knowledge_buckets"
        );
    }

    #[test]
    fn test_collection_path_follows_app_id() {
        let config = IngestConfig::new("tenant-7", "someone");
        assert_eq!(
            config.collection_path.as_str(),
            "artifacts/tenant-7/public/data/knowledge_buckets"
        );
    }
}
