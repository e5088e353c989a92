//! Conversational-assistant collaborator and transcript bookkeeping.
//!
//! The assistant itself is opaque: free text plus optional context in,
//! free text out. The transcript owns the ordered message log, seeds
//! the greeting, and turns failures into fixed fallback lines so a
//! conversation never dead-ends.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ChatRole;

/// Reply used when the assistant answers with an empty string.
pub const EMPTY_RESPONSE_FALLBACK: &str =
    "I apologize, but I encountered an issue. Please try again.";

/// Reply used when the assistant call fails outright.
pub const CONNECTION_FALLBACK: &str =
    "I apologize, but I'm having trouble connecting right now. Please try again in a moment.";

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Assistant unavailable: {0}")]
    Unavailable(String),
}

/// Request/response seam to whatever answers health questions.
pub trait HealthAssistant {
    fn respond(&self, message: &str, context: Option<&str>) -> Result<String, AssistantError>;
}

/// Opening line, personalized when a non-empty user name is known.
pub fn greeting(user_name: Option<&str>) -> String {
    match user_name {
        Some(name) if !name.is_empty() => {
            format!("Hello {name}! I'm your personal health assistant. How can I help you today?")
        }
        _ => "Hello! I'm your personal health assistant. How can I help you today?".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Ordered conversation log, assistant greeting first.
#[derive(Debug, Clone)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    pub fn new(user_name: Option<&str>) -> Self {
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::Assistant,
                text: greeting(user_name),
            }],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Record the user's message, ask the assistant, record the reply.
    /// Failures are logged and recorded as the fixed fallback lines
    /// rather than surfaced.
    pub fn send(
        &mut self,
        assistant: &dyn HealthAssistant,
        message: &str,
        context: Option<&str>,
    ) -> &str {
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            text: message.to_string(),
        });

        let reply = match assistant.respond(message, context) {
            Ok(text) if text.is_empty() => EMPTY_RESPONSE_FALLBACK.to_string(),
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(%error, "Assistant call failed");
                CONNECTION_FALLBACK.to_string()
            }
        };

        let index = self.messages.len();
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            text: reply,
        });
        &self.messages[index].text
    }
}
