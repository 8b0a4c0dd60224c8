
use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reference document owned by the document store. Immutable once indexed;
/// the chat pipeline is a read-only consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// SQLite rowid; doubles as insertion order for the deterministic
    /// equal-similarity tie-break.
    pub id: i64,
    pub title: String,
    pub body: String,
    pub url: Option<String>,
    /// Absent for rows that have not been indexed yet; such rows are
    /// invisible to search.
    pub embedding: Option<Vec<f32>>,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Input to [`crate::store::DocumentStore::insert`]. Append-only; the
/// indexing job avoids duplicates by choosing stable content when
/// re-indexing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDocument {
    pub title: String,
    pub body: String,
    pub url: Option<String>,
    pub embedding: Option<Vec<f32>>,
    pub metadata: serde_json::Value,
}

/// A document paired with its similarity to one query; exists only for the
/// duration of a retrieval call.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievedDocument {
    pub document: Document,
    /// Cosine similarity rescaled to [0, 1].
    pub similarity: f32,
}

/// Encode an embedding as little-endian f32 bytes for BLOB storage.
#[inline]
pub fn encode_embedding(vector: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(vector.len() * 4);
    for value in vector {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}

/// Decode a BLOB back into an embedding vector.
#[inline]
pub fn decode_embedding(bytes: &[u8]) -> Result<Vec<f32>> {
    if bytes.len() % 4 != 0 {
        bail!(
            "embedding blob length {} is not a multiple of 4",
            bytes.len()
        );
    }

    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}
