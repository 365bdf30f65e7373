//! Log entry types for ingestion.
//!
//! Defines the in-memory record handed to the ingestor. No field is
//! strictly required; every field has a default.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A log entry to be ingested into the knowledge bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogEntry {
    /// Stable document identifier. Synthesized from the clock when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Entry body text.
    pub content: String,
    /// Arbitrary key/value metadata attached to the entry.
    pub metadata: Map<String, Value>,
    /// Optional embedding vector. Omitted from the stored document when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector: Option<Vec<f64>>,
}

impl LogEntry {
    /// Create a new entry with an explicit message id and content.
    pub fn new(message_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            message_id: Some(message_id.into()),
            content: content.into(),
            metadata: Map::new(),
            vector: None,
        }
    }

    /// Attach metadata to the entry.
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Attach an embedding vector to the entry.
    pub fn with_vector(mut self, vector: Vec<f64>) -> Self {
        self.vector = Some(vector);
        self
    }

    /// The entry's message id, or a timestamp-derived one when absent.
    ///
    /// Synthesized ids use the unix timestamp with microsecond fraction,
    /// so two entries resolved at different clock readings get distinct ids.
    pub fn resolved_message_id(&self, now: DateTime<Utc>) -> String {
        match &self.message_id {
            Some(id) => id.clone(),
            None => format!(
                "msg_{}.{:06}",
                now.timestamp(),
                now.timestamp_subsec_micros()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_explicit_message_id_wins() {
        let entry = LogEntry::new("example_001", "Sample log entry for testing");
        let now = Utc::now();
        assert_eq!(entry.resolved_message_id(now), "example_001");
    }

    #[test]
    fn test_synthesized_message_id() {
        let entry = LogEntry {
            content: "no id".to_string(),
            ..Default::default()
        };
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let id = entry.resolved_message_id(now);
        assert!(!id.is_empty());
        assert!(id.starts_with("msg_"));
    }

    #[test]
    fn test_synthesized_ids_distinct_across_clock_readings() {
        let entry = LogEntry::default();
        let first = Utc.timestamp_micros(1_700_000_000_000_001).unwrap();
        let second = Utc.timestamp_micros(1_700_000_000_000_002).unwrap();
        assert_ne!(
            entry.resolved_message_id(first),
            entry.resolved_message_id(second)
        );
    }

    #[test]
    fn test_deserialize_with_all_defaults() {
        let entry: LogEntry = serde_json::from_str("{}").unwrap();
        assert!(entry.message_id.is_none());
        assert_eq!(entry.content, "");
        assert!(entry.metadata.is_empty());
        assert!(entry.vector.is_none());
    }

    #[test]
    fn test_deserialize_example_entry() {
        let entry: LogEntry = serde_json::from_value(json!({
            "message_id": "example_001",
            "content": "Sample log entry for testing",
            "metadata": { "source": "test", "type": "example" }
        }))
        .unwrap();
        assert_eq!(entry.message_id.as_deref(), Some("example_001"));
        assert_eq!(entry.metadata["source"], json!("test"));
        assert!(entry.vector.is_none());
    }

    #[test]
    fn test_builder() {
        let mut metadata = Map::new();
        metadata.insert("source".to_string(), json!("test"));

        let entry = LogEntry::new("id", "content")
            .with_metadata(metadata.clone())
            .with_vector(vec![0.1, 0.2]);

        assert_eq!(entry.metadata, metadata);
        assert_eq!(entry.vector, Some(vec![0.1, 0.2]));
    }
}
