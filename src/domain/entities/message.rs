use super::Operator;
use chrono::{DateTime, Utc};

/// Message content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// A slash command. `name` is the raw token, known or not.
    Command { name: String, args: Vec<String> },
    Text(String),
    Empty,
}

impl Content {
    pub fn command_name(&self) -> Option<&str> {
        match self {
            Content::Command { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// An incoming message from the chat transport.
///
/// `id` tags every log line about this message; `timestamp` is when it
/// was received.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub chat_id: String,
    pub sender: Option<Operator>,
    pub content: Content,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(chat_id: impl Into<String>, content: Content) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            chat_id: chat_id.into(),
            sender: None,
            content,
            timestamp: Utc::now(),
        }
    }

    pub fn with_sender(mut self, sender: Option<Operator>) -> Self {
        self.sender = sender;
        self
    }

    /// Sender for log lines, `unknown` when the platform did not say
    pub fn sender_label(&self) -> String {
        self.sender
            .as_ref()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Time since the message was received
    pub fn age(&self) -> chrono::Duration {
        Utc::now() - self.timestamp
    }
}
