//! Persisted document form of a log entry.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::entry::LogEntry;

/// A timestamp field that is either set from the client clock or resolved
/// by the store at write time.
///
/// The server-set variant is a placeholder: its value exists only after the
/// store has processed the write, so it is never representable as a client
/// timestamp in this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampField {
    /// Value taken from the local clock.
    Client(DateTime<Utc>),
    /// Placeholder the store replaces with its own clock reading on write.
    ServerSet,
}

/// The persisted form of a [`LogEntry`].
///
/// Always carries the writing user and tenant alongside the entry fields,
/// so documents remain attributable when read back outside this process.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    /// The user this document was written on behalf of.
    pub user_id: String,
    /// The tenant/application namespace.
    pub app_id: String,
    /// Document identifier within the collection.
    pub message_id: String,
    /// Entry body text.
    pub content: String,
    /// Arbitrary key/value metadata.
    pub metadata: Map<String, Value>,
    /// Client-clock write timestamp, RFC 3339 on the wire.
    pub timestamp: DateTime<Utc>,
    /// Resolved by the store at write time.
    pub indexed_at: TimestampField,
    /// Present only when the source entry supplied one.
    pub vector: Option<Vec<f64>>,
}

impl StoredDocument {
    /// Build the persisted form of an entry for the given user and tenant.
    pub fn from_entry(
        entry: &LogEntry,
        user_id: &str,
        app_id: &str,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            app_id: app_id.to_string(),
            message_id: entry.resolved_message_id(now),
            content: entry.content.clone(),
            metadata: entry.metadata.clone(),
            timestamp: now,
            indexed_at: TimestampField::ServerSet,
            vector: entry.vector.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_entry() {
        let mut metadata = Map::new();
        metadata.insert("source".to_string(), json!("test"));
        metadata.insert("type".to_string(), json!("example"));

        let entry = LogEntry::new("example_001", "Sample log entry for testing")
            .with_metadata(metadata.clone());
        let now = Utc::now();

        let doc = StoredDocument::from_entry(&entry, "jasonbender-c3x", "default-app-id", now);

        assert_eq!(doc.user_id, "jasonbender-c3x");
        assert_eq!(doc.app_id, "default-app-id");
        assert_eq!(doc.message_id, "example_001");
        assert_eq!(doc.content, "Sample log entry for testing");
        assert_eq!(doc.metadata, metadata);
        assert_eq!(doc.timestamp, now);
        assert_eq!(doc.indexed_at, TimestampField::ServerSet);
        assert!(doc.vector.is_none());
    }

    #[test]
    fn test_from_entry_with_vector() {
        let entry = LogEntry::new("vec_001", "").with_vector(vec![0.1, 0.2]);
        let doc = StoredDocument::from_entry(&entry, "u", "a", Utc::now());
        assert_eq!(doc.vector, Some(vec![0.1, 0.2]));
    }

    #[test]
    fn test_from_entry_synthesizes_missing_id() {
        let entry = LogEntry::default();
        let doc = StoredDocument::from_entry(&entry, "u", "a", Utc::now());
        assert!(!doc.message_id.is_empty());
    }
}
