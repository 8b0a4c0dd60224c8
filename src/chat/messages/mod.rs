
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Role of a chat message. `System` appears at most once per conversation,
/// always first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single message in a conversation, in the wire shape expected by
/// chat-completion APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[inline]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    #[inline]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    #[inline]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Request-scoped input to the chat pipeline. Conversation persistence is
/// the caller's responsibility; `history` arrives with every request and is
/// trimmed by the assembler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext {
    pub session_id: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm: Option<HashMap<String, String>>,
    #[serde(default)]
    pub was_proactive: bool,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

impl ChatContext {
    /// Minimal context for a fresh session with no history.
    #[inline]
    pub fn new(session_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            message: message.into(),
            page: None,
            utm: None,
            was_proactive: false,
            history: Vec::new(),
        }
    }
}

/// Output of one pipeline run. Always valid: failure paths inside the engine
/// degrade into a fallback response rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResult {
    pub response: String,
    pub suggested_actions: Vec<String>,
    pub retrieval_used: bool,
}
