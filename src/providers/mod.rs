// Model provider module
// Abstracts the embedding and chat-completion services behind a trait so the
// pipeline stays decoupled from any particular vendor or HTTP client

pub mod openai;

pub use openai::OpenAiClient;

use crate::Result;
use crate::chat::messages::ChatMessage;

/// Interface to a language-model provider. Implementors encapsulate
/// transport, serialization, and vendor-specific API details; the chat
/// pipeline holds a long-lived shared handle injected at startup.
pub trait ModelProvider: Send + Sync {
    /// Turn text into a fixed-length embedding vector.
    ///
    /// Fails with [`crate::LeadchatError::Embedding`] on upstream failure or
    /// when the returned vector does not match the configured dimension.
    /// Not retried internally; the caller decides whether to retry.
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Send an assembled message sequence and return the assistant's reply
    /// text. Fails with [`crate::LeadchatError::Model`] on upstream failure.
    fn chat_complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
        max_output_tokens: u32,
    ) -> Result<String>;
}
