//! Collection path derivation for the knowledge bucket namespace.

use std::fmt;

/// The namespaced location under which knowledge bucket documents are
/// grouped in the document store.
///
/// Every deployment writes under
/// `artifacts/{app_id}/public/data/knowledge_buckets`, which keeps tenants
/// isolated by app id while sharing one database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionPath(String);

impl CollectionPath {
    /// Compute the collection path for the given app id.
    pub fn for_app(app_id: &str) -> Self {
        Self(format!(
            "artifacts/{}/public/data/knowledge_buckets",
            app_id
        ))
    }

    /// The collection path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full document path for a message id: `{collection_path}/{message_id}`.
    pub fn document_path(&self, message_id: &str) -> String {
        format!("{}/{}", self.0, message_id)
    }
}

impl fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_app() {
        let path = CollectionPath::for_app("default-app-id");
        assert_eq!(
            path.as_str(),
            "artifacts/default-app-id/public/data/knowledge_buckets"
        );
    }

    #[test]
    fn test_for_app_arbitrary_id() {
        let path = CollectionPath::for_app("tenant-42");
        assert_eq!(
            path.as_str(),
            "artifacts/tenant-42/public/data/knowledge_buckets"
        );
    }

    #[test]
    fn test_document_path() {
        let path = CollectionPath::for_app("default-app-id");
        assert_eq!(
            path.document_path("example_001"),
            "artifacts/default-app-id/public/data/knowledge_buckets/example_001"
        );
    }
}
