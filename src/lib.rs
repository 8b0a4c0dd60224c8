use thiserror::Error;

pub type Result<T> = std::result::Result<T, LeadchatError>;

#[derive(Error, Debug)]
pub enum LeadchatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Document store error: {0}")]
    Store(String),

    #[error("Embedding service error: {0}")]
    Embedding(String),

    #[error("Model service error: {0}")]
    Model(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub mod chat;
pub mod commands;
pub mod config;
pub mod indexer;
pub mod providers;
pub mod store;
