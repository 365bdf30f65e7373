//! Firestore REST value encoding.
//!
//! The Firestore REST API represents every field as a tagged `Value` object
//! (`stringValue`, `integerValue`, `mapValue`, ...). This module converts
//! in-memory documents and arbitrary JSON metadata into that form.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value};

use knowledge_ingestor_shared::{StoredDocument, TimestampField};

/// Encode a full document into a Firestore `fields` map.
///
/// The `indexed_at` field is encoded only for client-set timestamps; the
/// server-set variant is resolved through a write transform instead (see
/// the client's commit request), so it must not appear in the field map.
/// The `vector` key is present only when the document carries one.
pub fn encode_document(document: &StoredDocument) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("user_id".to_string(), string_value(&document.user_id));
    fields.insert("app_id".to_string(), string_value(&document.app_id));
    fields.insert("message_id".to_string(), string_value(&document.message_id));
    fields.insert("content".to_string(), string_value(&document.content));
    fields.insert(
        "metadata".to_string(),
        encode_value(&Value::Object(document.metadata.clone())),
    );
    fields.insert(
        "timestamp".to_string(),
        timestamp_value(&document.timestamp),
    );
    if let TimestampField::Client(ts) = &document.indexed_at {
        fields.insert("indexed_at".to_string(), timestamp_value(ts));
    }
    if let Some(vector) = &document.vector {
        let values: Vec<Value> = vector
            .iter()
            .map(|n| json!({ "doubleValue": n }))
            .collect();
        fields.insert(
            "vector".to_string(),
            json!({ "arrayValue": { "values": values } }),
        );
    }
    fields
}

/// Encode an arbitrary JSON value as a Firestore `Value`.
pub fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            // Firestore carries 64-bit integers as strings
            if let Some(i) = n.as_i64() {
                json!({ "integerValue": i.to_string() })
            } else if let Some(u) = n.as_u64() {
                json!({ "integerValue": u.to_string() })
            } else {
                json!({ "doubleValue": n.as_f64() })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(encode_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => {
            let fields: Map<String, Value> = map
                .iter()
                .map(|(k, v)| (k.clone(), encode_value(v)))
                .collect();
            json!({ "mapValue": { "fields": fields } })
        }
    }
}

fn string_value(s: &str) -> Value {
    json!({ "stringValue": s })
}

fn timestamp_value(ts: &DateTime<Utc>) -> Value {
    json!({ "timestampValue": ts.to_rfc3339_opts(SecondsFormat::Micros, true) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use knowledge_ingestor_shared::LogEntry;

    fn sample_document(entry: &LogEntry) -> StoredDocument {
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        StoredDocument::from_entry(entry, "jasonbender-c3x", "default-app-id", now)
    }

    #[test]
    fn test_encode_scalars() {
        assert_eq!(encode_value(&json!("text")), json!({ "stringValue": "text" }));
        assert_eq!(encode_value(&json!(42)), json!({ "integerValue": "42" }));
        assert_eq!(encode_value(&json!(1.5)), json!({ "doubleValue": 1.5 }));
        assert_eq!(encode_value(&json!(true)), json!({ "booleanValue": true }));
        assert_eq!(encode_value(&Value::Null), json!({ "nullValue": null }));
    }

    #[test]
    fn test_encode_nested() {
        let encoded = encode_value(&json!({ "source": "test", "attempt": 2 }));
        assert_eq!(
            encoded,
            json!({
                "mapValue": {
                    "fields": {
                        "source": { "stringValue": "test" },
                        "attempt": { "integerValue": "2" }
                    }
                }
            })
        );
    }

    #[test]
    fn test_encode_array() {
        let encoded = encode_value(&json!(["a", 1]));
        assert_eq!(
            encoded,
            json!({
                "arrayValue": {
                    "values": [
                        { "stringValue": "a" },
                        { "integerValue": "1" }
                    ]
                }
            })
        );
    }

    #[test]
    fn test_encode_document_omits_server_set_indexed_at() {
        let entry = LogEntry::new("example_001", "Sample log entry for testing");
        let fields = encode_document(&sample_document(&entry));

        assert_eq!(
            fields["message_id"],
            json!({ "stringValue": "example_001" })
        );
        assert_eq!(
            fields["user_id"],
            json!({ "stringValue": "jasonbender-c3x" })
        );
        // Resolved by a write transform, never a client value
        assert!(!fields.contains_key("indexed_at"));
    }

    #[test]
    fn test_encode_document_vector_presence() {
        let without = LogEntry::new("a", "");
        assert!(!encode_document(&sample_document(&without)).contains_key("vector"));

        let with = LogEntry::new("b", "").with_vector(vec![0.1, 0.2]);
        let fields = encode_document(&sample_document(&with));
        assert_eq!(
            fields["vector"],
            json!({
                "arrayValue": {
                    "values": [
                        { "doubleValue": 0.1 },
                        { "doubleValue": 0.2 }
                    ]
                }
            })
        );
    }

    #[test]
    fn test_encode_document_timestamp_is_rfc3339_utc() {
        let entry = LogEntry::new("t", "");
        let fields = encode_document(&sample_document(&entry));
        assert_eq!(
            fields["timestamp"],
            json!({ "timestampValue": "2026-01-15T12:00:00.000000Z" })
        );
    }
}
