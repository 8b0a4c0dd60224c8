// Document store module
// SQLite-backed persistence for reference documents plus exact cosine
// similarity search over their embeddings

#[cfg(test)]
mod tests;

pub mod models;
pub mod queries;

pub use models::{Document, NewDocument, RetrievedDocument};

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use tracing::{debug, info};

use crate::{LeadchatError, Result};
use queries::DocumentQueries;

pub type DbPool = Pool<Sqlite>;

/// Persisted collection of reference documents with nearest-neighbor search
/// by cosine similarity. Opened with a fixed embedding dimension; vectors of
/// any other length are rejected outright.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    pool: DbPool,
    dimension: usize,
}

impl DocumentStore {
    /// Open (or create) a store backed by a SQLite file.
    #[inline]
    pub async fn open<P: AsRef<Path>>(path: P, dimension: usize) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LeadchatError::Store(format!("Failed to create store directory: {e}"))
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .connect_with(options)
            .await
            .map_err(|e| LeadchatError::Store(format!("Failed to connect to store: {e}")))?;

        Self::from_pool(pool, dimension).await
    }

    /// Open an in-memory store; used by tests and demos. A single pooled
    /// connection keeps every caller on the same in-memory database.
    #[inline]
    pub async fn in_memory(dimension: usize) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .in_memory(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| {
                LeadchatError::Store(format!("Failed to create in-memory store: {e}"))
            })?;

        Self::from_pool(pool, dimension).await
    }

    async fn from_pool(pool: DbPool, dimension: usize) -> Result<Self> {
        info!("Running document store migrations");
        sqlx::migrate!("src/store/migrations")
            .run(&pool)
            .await
            .map_err(|e| LeadchatError::Store(format!("Failed to run migrations: {e}")))?;

        Ok(Self { pool, dimension })
    }

    #[inline]
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Append a document. No upsert semantics: re-indexing replaces content
    /// by inserting fresh rows, not by mutating existing ones.
    #[inline]
    pub async fn insert(&self, document: &NewDocument) -> Result<i64> {
        if let Some(embedding) = &document.embedding {
            self.check_dimension(embedding.len())?;
        }

        DocumentQueries::create(&self.pool, document)
            .await
            .map_err(|e| LeadchatError::Store(format!("{e:#}")))
    }

    #[inline]
    pub async fn get(&self, id: i64) -> Result<Option<Document>> {
        DocumentQueries::get_by_id(&self.pool, id)
            .await
            .map_err(|e| LeadchatError::Store(format!("{e:#}")))
    }

    #[inline]
    pub async fn count(&self) -> Result<u64> {
        DocumentQueries::count(&self.pool)
            .await
            .map_err(|e| LeadchatError::Store(format!("{e:#}")))
    }

    /// Nearest-neighbor search by cosine similarity: full scan over every
    /// embedded document, ordered by descending similarity, at most `limit`
    /// results. Equal similarities keep insertion order (the rows are
    /// fetched in id order and the sort is stable), so fixtures reproduce.
    #[inline]
    pub async fn search(
        &self,
        query_vector: &[f32],
        limit: usize,
    ) -> Result<Vec<RetrievedDocument>> {
        self.check_dimension(query_vector.len())?;

        let documents = DocumentQueries::list_embedded(&self.pool)
            .await
            .map_err(|e| LeadchatError::Store(format!("{e:#}")))?;

        let mut results = Vec::with_capacity(documents.len());
        for document in documents {
            let embedding = document
                .embedding
                .as_deref()
                .context("embedded document row is missing its vector")
                .map_err(|e| LeadchatError::Store(e.to_string()))?;
            self.check_dimension(embedding.len())?;

            let similarity = rescaled_cosine_similarity(query_vector, embedding);
            results.push(RetrievedDocument {
                document,
                similarity,
            });
        }

        results.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        results.truncate(limit);

        debug!(
            "Similarity search returned {} of at most {} documents",
            results.len(),
            limit
        );
        Ok(results)
    }

    fn check_dimension(&self, len: usize) -> Result<()> {
        if len != self.dimension {
            return Err(LeadchatError::Store(format!(
                "Vector dimension mismatch: store expects {}, got {}",
                self.dimension, len
            )));
        }
        Ok(())
    }
}

/// Cosine similarity rescaled from [-1, 1] to [0, 1]. A zero-norm vector on
/// either side has no direction to compare and yields 0.
#[inline]
pub fn rescaled_cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let cosine = (dot / (norm_a * norm_b)).clamp(-1.0, 1.0);
    (1.0 + cosine) / 2.0
}
