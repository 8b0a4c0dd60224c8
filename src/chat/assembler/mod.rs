
use std::fmt::Write;

use crate::chat::messages::ChatMessage;
use crate::store::RetrievedDocument;

pub const RETRIEVAL_CONTEXT_HEADING: &str = "## Retrieval Context:";
const BLOCK_SEPARATOR: &str = "\n\n---\n\n";

/// Build the bounded message sequence sent to the language model:
/// `[system] + trimmed history + [new user message]`.
///
/// The system prompt is extended with a retrieval-context section when
/// `retrieved` is non-empty, and history is trimmed to its last
/// `history_window` entries. The result is never empty and always ends with
/// the new user message.
#[inline]
pub fn assemble(
    system_prompt: &str,
    retrieved: &[RetrievedDocument],
    history: &[ChatMessage],
    new_message: &str,
    history_window: usize,
) -> Vec<ChatMessage> {
    let system_content = match format_retrieval_context(retrieved) {
        Some(context) => format!("{system_prompt}\n\n{RETRIEVAL_CONTEXT_HEADING}\n{context}"),
        None => system_prompt.to_string(),
    };

    let trimmed_start = history.len().saturating_sub(history_window);
    let trimmed = &history[trimmed_start..];

    let mut messages = Vec::with_capacity(trimmed.len() + 2);
    messages.push(ChatMessage::system(system_content));
    messages.extend_from_slice(trimmed);
    messages.push(ChatMessage::user(new_message));
    messages
}

/// Format retrieved documents as labeled blocks with their relevance as a
/// one-decimal percentage. Returns None when nothing was retrieved.
#[inline]
pub fn format_retrieval_context(retrieved: &[RetrievedDocument]) -> Option<String> {
    if retrieved.is_empty() {
        return None;
    }

    let mut context = String::new();
    for (i, doc) in retrieved.iter().enumerate() {
        if i > 0 {
            context.push_str(BLOCK_SEPARATOR);
        }
        let _ = write!(
            context,
            "[{}]\n{}\nRelevance: {:.1}%",
            doc.document.title,
            doc.document.body,
            doc.similarity * 100.0
        );
    }
    Some(context)
}
