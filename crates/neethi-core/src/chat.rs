//! Chat turns and the `/chat` wire payloads

use serde::{Deserialize, Serialize};

/// Who authored a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => "Neethi",
        }
    }
}

/// A single entry in the conversation
///
/// Turns are never edited after they are appended; display order is
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub sender: Sender,
    pub text: String,
    /// Source links attached to a bot reply, in the order the backend sent them
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    /// Whether the backend generated this reply with its language model
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub ai_generated: bool,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            sources: Vec::new(),
            ai_generated: false,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            sources: Vec::new(),
            ai_generated: false,
        }
    }

    /// Build the bot turn that answers a successful `/chat` call
    pub fn from_reply(reply: ChatReply) -> Self {
        Self {
            sender: Sender::Bot,
            text: reply.response,
            sources: reply.sources.unwrap_or_default(),
            ai_generated: reply.ai_generated.unwrap_or(false),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    /// Message body split into display lines; blank lines are kept so
    /// paragraph spacing survives.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

/// Body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful `/chat` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub sources: Option<Vec<String>>,
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub ai_generated: Option<bool>,
}
