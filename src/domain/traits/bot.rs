use async_trait::async_trait;
use crate::application::errors::BotError;
use crate::domain::entities::ParseMode;

/// Bot trait - abstraction for messaging platform adapters
#[async_trait]
pub trait Bot: Send + Sync {
    /// Prepare the adapter before the first message is handled
    async fn start(&self) -> Result<(), BotError>;

    /// Send a message to a chat, returns the platform message id
    async fn send_message(&self, chat_id: &str, text: &str, parse_mode: ParseMode) -> Result<String, BotError>;

    /// Get bot info
    fn bot_info(&self) -> BotInfo;
}

/// Bot information
#[derive(Debug, Clone)]
pub struct BotInfo {
    pub id: String,
    pub name: String,
    pub username: String,
}
