// Indexer module
// Offline seeding of the document store: embed content entries and append
// them as searchable documents


use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::Result;
use crate::providers::ModelProvider;
use crate::store::{DocumentStore, NewDocument};

/// One entry of a JSON seed file: an array of these describes the content
/// to index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntry {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexingStats {
    pub indexed: usize,
    pub failed: usize,
}

/// Embeds and inserts content entries. Indexing is an offline job separate
/// from the chat pipeline, which only ever reads the store.
pub struct Indexer<P> {
    provider: Arc<P>,
    store: Arc<DocumentStore>,
}

impl<P: ModelProvider> Indexer<P> {
    #[inline]
    pub fn new(provider: Arc<P>, store: Arc<DocumentStore>) -> Self {
        Self { provider, store }
    }

    /// Index every entry of a JSON seed file.
    #[inline]
    pub async fn index_file<Q: AsRef<Path>>(&self, path: Q) -> Result<IndexingStats> {
        let entries = load_content_file(path.as_ref())?;
        info!(
            "Indexing {} content entries from {}",
            entries.len(),
            path.as_ref().display()
        );
        Ok(self.index_entries(&entries).await)
    }

    /// Index a batch of entries. An entry whose embedding or insert fails is
    /// logged and skipped; one bad entry never aborts the run.
    #[inline]
    pub async fn index_entries(&self, entries: &[ContentEntry]) -> IndexingStats {
        let mut stats = IndexingStats::default();

        for entry in entries {
            match self.index_entry(entry).await {
                Ok(id) => {
                    info!("Indexed document {}: {}", id, entry.title);
                    stats.indexed += 1;
                }
                Err(e) => {
                    error!("Failed to index {}: {e}", entry.title);
                    stats.failed += 1;
                }
            }
        }

        stats
    }

    async fn index_entry(&self, entry: &ContentEntry) -> Result<i64> {
        let embedding = self.provider.embed(&entry.body)?;

        self.store
            .insert(&NewDocument {
                title: entry.title.clone(),
                body: entry.body.clone(),
                url: entry.url.clone(),
                embedding: Some(embedding),
                metadata: entry
                    .metadata
                    .clone()
                    .unwrap_or(serde_json::Value::Object(serde_json::Map::new())),
            })
            .await
    }
}

fn load_content_file(path: &Path) -> Result<Vec<ContentEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file: {}", path.display()))?;

    let entries: Vec<ContentEntry> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse content file: {}", path.display()))?;

    Ok(entries)
}
