//! Ingestor runner.
//!
//! Upserts log entries as namespaced documents in the store and reports
//! the per-entry and aggregate outcome on the console.

use std::sync::Arc;

use chrono::Utc;
use serde_json::{json, Map};
use tracing::{debug, error, instrument};

use crate::config::IngestConfig;
use knowledge_ingestor_repository::DocumentStoreClient;
use knowledge_ingestor_shared::{LogEntry, StoredDocument};

/// Width of the console banner rules.
const BANNER_WIDTH: usize = 60;

/// Summary of one ingestion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSummary {
    /// Total number of entries processed.
    pub total: usize,
    /// Number of successful upserts.
    pub succeeded: usize,
    /// Number of failed upserts.
    pub failed: usize,
}

/// Ingestor that upserts log entries into the document store.
///
/// Per-entry write failures are reported and counted but never abort the
/// run; only store client construction can fail the process.
pub struct Ingestor {
    client: Arc<dyn DocumentStoreClient>,
    config: IngestConfig,
}

impl Ingestor {
    /// Create a new ingestor with the given store client and configuration.
    pub fn new(client: Arc<dyn DocumentStoreClient>, config: IngestConfig) -> Self {
        Self { client, config }
    }

    /// The resolved configuration this ingestor runs with.
    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Upsert one entry. Returns whether the write succeeded.
    ///
    /// Store failures are caught here: they are reported on the console
    /// with the offending message id and converted to `false`, so one bad
    /// entry never stops the rest of the batch.
    #[instrument(skip(self, entry))]
    pub async fn ingest(&self, entry: &LogEntry) -> bool {
        let now = Utc::now();
        let document =
            StoredDocument::from_entry(entry, &self.config.user_id, &self.config.app_id, now);
        let path = self.config.collection_path.document_path(&document.message_id);

        match self.client.upsert_document(&path, &document).await {
            Ok(()) => {
                println!(
                    "✓ Ingested: {} to {}",
                    document.message_id, self.config.collection_path
                );
                debug!(message_id = %document.message_id, path = %path, "Entry upserted");
                true
            }
            Err(e) => {
                println!("✗ Failed to ingest {}: {}", document.message_id, e);
                error!(
                    message_id = %document.message_id,
                    error = %e,
                    "Failed to upsert entry"
                );
                false
            }
        }
    }

    /// The fixed example batch written by a run.
    pub fn example_entries() -> Vec<LogEntry> {
        let mut metadata = Map::new();
        metadata.insert("source".to_string(), json!("test"));
        metadata.insert("type".to_string(), json!("example"));

        vec![LogEntry::new("example_001", "Sample log entry for testing").with_metadata(metadata)]
    }

    /// Run a full ingestion pass over the example batch.
    ///
    /// Prints the banner, upserts every entry, and prints the final
    /// `<successes>/<total>` summary. The returned summary reports failures
    /// but the run itself always completes.
    pub async fn run(&self) -> IngestSummary {
        self.print_banner();

        let entries = Self::example_entries();
        let total = entries.len();
        let mut succeeded = 0;

        for entry in &entries {
            if self.ingest(entry).await {
                succeeded += 1;
            }
        }

        println!("{}", "=".repeat(BANNER_WIDTH));
        println!("Ingestion complete: {}/{} successful", succeeded, total);
        println!("{}", "=".repeat(BANNER_WIDTH));

        IngestSummary {
            total,
            succeeded,
            failed: total - succeeded,
        }
    }

    fn print_banner(&self) {
        println!("{}", "=".repeat(BANNER_WIDTH));
        println!("Knowledge Bucket Ingestor");
        println!("{}", "=".repeat(BANNER_WIDTH));
        println!("App ID: {}", self.config.app_id);
        println!("User ID: {}", self.config.user_id);
        println!("Collection Path: {}", self.config.collection_path);
        println!("{}", "=".repeat(BANNER_WIDTH));
    }
}
