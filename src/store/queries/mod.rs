
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::models::{Document, NewDocument, decode_embedding, encode_embedding};

pub struct DocumentQueries;

impl DocumentQueries {
    #[inline]
    pub async fn create(pool: &SqlitePool, document: &NewDocument) -> Result<i64> {
        let now = Utc::now();
        let embedding_blob = document.embedding.as_deref().map(encode_embedding);
        let metadata =
            serde_json::to_string(&document.metadata).context("Failed to serialize metadata")?;

        let id = sqlx::query(
            "INSERT INTO documents (title, body, url, embedding, metadata, created_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&document.title)
        .bind(&document.body)
        .bind(&document.url)
        .bind(embedding_blob)
        .bind(metadata)
        .bind(now)
        .execute(pool)
        .await
        .context("Failed to insert document")?
        .last_insert_rowid();

        debug!("Inserted document {} ({})", id, document.title);
        Ok(id)
    }

    #[inline]
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Document>> {
        let row = sqlx::query(
            "SELECT id, title, body, url, embedding, metadata, created_at \
             FROM documents WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("Failed to get document by id")?;

        row.map(|row| Self::map_row(&row)).transpose()
    }

    /// All documents that carry an embedding, in insertion order. Rows with
    /// a NULL embedding are not yet indexed and stay invisible to search.
    #[inline]
    pub async fn list_embedded(pool: &SqlitePool) -> Result<Vec<Document>> {
        let rows = sqlx::query(
            "SELECT id, title, body, url, embedding, metadata, created_at \
             FROM documents WHERE embedding IS NOT NULL ORDER BY id ASC",
        )
        .fetch_all(pool)
        .await
        .context("Failed to list embedded documents")?;

        rows.iter().map(Self::map_row).collect()
    }

    #[inline]
    pub async fn count(pool: &SqlitePool) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents")
            .fetch_one(pool)
            .await
            .context("Failed to count documents")?;

        Ok(count.unsigned_abs())
    }

    fn map_row(row: &SqliteRow) -> Result<Document> {
        let embedding = row
            .try_get::<Option<Vec<u8>>, _>("embedding")
            .context("Failed to read embedding column")?
            .as_deref()
            .map(decode_embedding)
            .transpose()?;

        let metadata: String = row
            .try_get("metadata")
            .context("Failed to read metadata column")?;
        let metadata =
            serde_json::from_str(&metadata).context("Failed to parse document metadata")?;

        Ok(Document {
            id: row.try_get("id").context("Failed to read id column")?,
            title: row
                .try_get("title")
                .context("Failed to read title column")?,
            body: row.try_get("body").context("Failed to read body column")?,
            url: row.try_get("url").context("Failed to read url column")?,
            embedding,
            metadata,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .context("Failed to read created_at column")?,
        })
    }
}
