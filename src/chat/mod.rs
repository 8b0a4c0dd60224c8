// Chat pipeline module
// Composes retrieval, prompt assembly, generation, and action
// classification behind a single entry point


pub mod actions;
pub mod assembler;
pub mod messages;
pub mod prompt;
pub mod retriever;

pub use messages::{ChatContext, ChatMessage, ChatResult, Role};
pub use prompt::SYSTEM_PROMPT;
pub use retriever::Retriever;

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::config::ChatConfig;
use crate::providers::ModelProvider;
use crate::store::DocumentStore;

/// User-facing reply when generation fails. Internal errors never reach the
/// end user.
pub const FALLBACK_RESPONSE: &str =
    "I apologize, but I encountered an error. Please try again.";

/// Top-level chat orchestrator. Holds long-lived shared handles to the
/// provider and document store; carries no cross-request state of its own,
/// so one engine serves any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct ChatEngine<P> {
    provider: Arc<P>,
    retriever: Retriever<P>,
    config: ChatConfig,
}

impl<P: ModelProvider> ChatEngine<P> {
    #[inline]
    pub fn new(provider: Arc<P>, store: Arc<DocumentStore>, config: ChatConfig) -> Self {
        let retriever = Retriever::new(Arc::clone(&provider), store, config.retrieval_limit);
        Self {
            provider,
            retriever,
            config,
        }
    }

    /// Run the full pipeline for one user message: retrieve, assemble,
    /// generate, classify.
    ///
    /// Infallible by design: retrieval failures degrade to an empty context
    /// and generation failures to a fixed fallback reply, so the chat
    /// surface stays available while downstream services are down.
    #[inline]
    pub async fn generate_chat_response(&self, context: &ChatContext) -> ChatResult {
        let retrieved = match self.retriever.retrieve(&context.message).await {
            Ok(documents) => documents,
            Err(e) => {
                warn!(
                    session_id = %context.session_id,
                    "Retrieval failed, continuing without context: {e}"
                );
                Vec::new()
            }
        };
        let retrieval_used = !retrieved.is_empty();

        let messages = assembler::assemble(
            SYSTEM_PROMPT,
            &retrieved,
            &context.history,
            &context.message,
            self.config.history_window,
        );

        debug!(
            session_id = %context.session_id,
            retrieved = retrieved.len(),
            messages = messages.len(),
            "Requesting chat completion"
        );

        let response = match self.provider.chat_complete(
            &messages,
            self.config.temperature,
            self.config.max_output_tokens,
        ) {
            Ok(text) => text,
            Err(e) => {
                error!(
                    session_id = %context.session_id,
                    "Generation failed, returning fallback response: {e}"
                );
                return ChatResult {
                    response: FALLBACK_RESPONSE.to_string(),
                    suggested_actions: Vec::new(),
                    retrieval_used,
                };
            }
        };

        let suggested_actions = actions::classify(&response, &context.message);

        ChatResult {
            response,
            suggested_actions,
            retrieval_used,
        }
    }
}
