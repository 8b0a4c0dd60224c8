
use std::sync::Arc;

use tracing::debug;

use crate::Result;
use crate::providers::ModelProvider;
use crate::store::{DocumentStore, RetrievedDocument};

/// Fetches the documents most relevant to a query: embed the query, then
/// run a similarity search with the configured limit.
#[derive(Debug, Clone)]
pub struct Retriever<P> {
    provider: Arc<P>,
    store: Arc<DocumentStore>,
    limit: usize,
}

impl<P: ModelProvider> Retriever<P> {
    #[inline]
    pub fn new(provider: Arc<P>, store: Arc<DocumentStore>, limit: usize) -> Self {
        Self {
            provider,
            store,
            limit,
        }
    }

    /// Retrieve the top documents for `query`. An empty store yields an
    /// empty sequence, not an error: absent knowledge degrades to "no
    /// retrieval context". Embedding failures do propagate; the orchestrator
    /// decides whether to swallow them.
    #[inline]
    pub async fn retrieve(&self, query: &str) -> Result<Vec<RetrievedDocument>> {
        self.retrieve_with_limit(query, self.limit).await
    }

    #[inline]
    pub async fn retrieve_with_limit(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<RetrievedDocument>> {
        let query_vector = self.provider.embed(query)?;
        let results = self.store.search(&query_vector, limit).await?;

        debug!(
            "Retrieved {} documents for query (length: {})",
            results.len(),
            query.len()
        );
        Ok(results)
    }
}
