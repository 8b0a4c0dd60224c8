use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::chat::{ChatContext, ChatEngine};
use crate::config::Config;
use crate::indexer::Indexer;
use crate::providers::OpenAiClient;
use crate::store::DocumentStore;

async fn open_store(config: &Config) -> Result<Arc<DocumentStore>> {
    let store = DocumentStore::open(
        config.database_path(),
        config.openai.embedding_dimension as usize,
    )
    .await
    .context("Failed to open document store")?;
    Ok(Arc::new(store))
}

fn build_client(config: &Config) -> Result<Arc<OpenAiClient>> {
    let client = OpenAiClient::new(&config.openai).context("Failed to create OpenAI client")?;
    Ok(Arc::new(client))
}

/// Print the resolved configuration
#[inline]
pub fn show_config(config: &Config) -> Result<()> {
    println!("Configuration directory: {}", config.base_dir.display());
    println!("Document store: {}", config.database_path().display());
    println!();
    println!("API base: {}", config.openai.api_base);
    println!("Embedding model: {}", config.openai.embedding_model);
    println!(
        "Embedding dimension: {}",
        config.openai.embedding_dimension
    );
    println!("Chat model: {}", config.openai.chat_model);
    println!();
    println!("History window: {}", config.chat.history_window);
    println!("Retrieval limit: {}", config.chat.retrieval_limit);
    println!("Temperature: {}", config.chat.temperature);
    println!("Max output tokens: {}", config.chat.max_output_tokens);
    println!();
    match config.openai.resolve_api_key() {
        Some(_) => println!("API key: configured"),
        None => println!("API key: missing (set OPENAI_API_KEY)"),
    }
    Ok(())
}

/// Index a JSON seed file of content entries into the document store
#[inline]
pub async fn index_content(config: &Config, file: &Path) -> Result<()> {
    let store = open_store(config).await?;
    let client = build_client(config)?;

    let indexer = Indexer::new(client, store);
    let stats = indexer.index_file(file).await?;

    println!(
        "Indexing completed: {} indexed, {} failed",
        stats.indexed, stats.failed
    );
    Ok(())
}

/// Run one chat turn against the configured provider and store
#[inline]
pub async fn ask(config: &Config, message: &str, session_id: Option<String>) -> Result<()> {
    let store = open_store(config).await?;
    let client = build_client(config)?;

    let session_id = session_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    info!("Running chat turn for session {}", session_id);

    let engine = ChatEngine::new(client, store, config.chat.clone());
    let result = engine
        .generate_chat_response(&ChatContext::new(session_id, message))
        .await;

    println!("{}", result.response);
    println!();
    if result.suggested_actions.is_empty() {
        println!("Suggested actions: none");
    } else {
        println!("Suggested actions: {}", result.suggested_actions.join(", "));
    }
    println!("Retrieval used: {}", result.retrieval_used);
    Ok(())
}

/// Debug similarity search against the document store
#[inline]
pub async fn search(config: &Config, query: &str, limit: usize) -> Result<()> {
    use crate::providers::ModelProvider;

    let store = open_store(config).await?;
    let client = build_client(config)?;

    let query_vector = client.embed(query)?;
    let results = store.search(&query_vector, limit).await?;

    if results.is_empty() {
        println!("No documents matched.");
        return Ok(());
    }

    for result in &results {
        println!(
            "{:>6.1}%  [{}] {}",
            result.similarity * 100.0,
            result.document.id,
            result.document.title
        );
        if let Some(url) = &result.document.url {
            println!("         {url}");
        }
    }
    Ok(())
}

/// Show document store status
#[inline]
pub async fn show_status(config: &Config) -> Result<()> {
    let store = open_store(config).await?;
    let count = store.count().await?;

    println!("Document store: {}", config.database_path().display());
    println!("Documents: {count}");
    println!(
        "Embedding dimension: {}",
        config.openai.embedding_dimension
    );
    Ok(())
}
