//! Telegram adapter

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Command, Operator, ParseMode};
use crate::domain::traits::{Bot, BotInfo};
use crate::application::errors::BotError;

/// Telegram API base URL
const API_BASE: &str = "https://api.telegram.org";

/// Telegram update type
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Chat {
    pub id: i64,
}

impl From<&User> for Operator {
    fn from(user: &User) -> Self {
        Operator::new(user.id.to_string())
            .with_username(user.username.clone())
            .with_first_name(user.first_name.clone())
    }
}

/// Telegram bot adapter
pub struct TelegramAdapter {
    token: String,
    api_base: String,
    client: Client,
    info: BotInfo,
}

impl TelegramAdapter {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_base(token, API_BASE)
    }

    pub fn with_api_base(token: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            client: Client::new(),
            info: BotInfo {
                id: "unknown".to_string(),
                name: "vps-dashboard-bot".to_string(),
                username: "vps_dashboard_bot".to_string(),
            },
        }
    }

    /// Get the API URL for a method
    fn api_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token, method)
    }

    /// Fetch bot info from Telegram API
    pub async fn fetch_bot_info(&mut self) -> Result<(), BotError> {
        #[derive(Deserialize)]
        struct Response {
            result: BotInfoResponse,
        }

        #[derive(Deserialize)]
        struct BotInfoResponse {
            id: i64,
            first_name: String,
            username: String,
        }

        let url = self.api_url("getMe");
        let response = self.client
            .get(&url)
            .send()
            .await
            .map_err(|e| BotError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BotError::Network(format!("Telegram API error: {}", response.status())));
        }

        let data: Response = response
            .json()
            .await
            .map_err(|e| BotError::Parse(e.to_string()))?;

        self.info = BotInfo {
            id: data.result.id.to_string(),
            name: data.result.first_name,
            username: data.result.username,
        };

        Ok(())
    }

    /// Get updates from Telegram using getUpdates API
    pub async fn get_updates(&self, offset: i64, timeout: i64) -> Result<Vec<Update>, BotError> {
        #[derive(Serialize)]
        struct GetUpdatesRequest {
            offset: i64,
            timeout: i64,
            allowed_updates: Vec<String>,
        }

        #[derive(Deserialize)]
        struct Response {
            result: Vec<Update>,
        }

        let url = self.api_url("getUpdates");
        let request = GetUpdatesRequest {
            offset,
            timeout,
            allowed_updates: vec!["message".to_string()],
        };

        let response = self.client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| BotError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BotError::Network(format!("Telegram API error: {}", response.status())));
        }

        let data: Response = response
            .json()
            .await
            .map_err(|e| BotError::Parse(e.to_string()))?;

        Ok(data.result)
    }

    /// Confirm every update below `offset` so it is not delivered again.
    ///
    /// Used before the process exits, since the next poll never happens.
    pub async fn acknowledge(&self, offset: i64) -> Result<(), BotError> {
        self.get_updates(offset, 0).await.map(|_| ())
    }

    /// Send a message with specific parse mode
    pub async fn send_message_with_format(&self, chat_id: &str, text: &str, parse_mode: Option<&str>) -> Result<String, BotError> {
        #[derive(Serialize)]
        struct SendMessageRequest {
            chat_id: String,
            text: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            parse_mode: Option<String>,
        }

        #[derive(Deserialize)]
        struct Response {
            result: MessageResult,
        }

        #[derive(Deserialize)]
        struct MessageResult {
            message_id: i64,
        }

        let url = self.api_url("sendMessage");
        let request = SendMessageRequest {
            chat_id: chat_id.to_string(),
            text: text.to_string(),
            parse_mode: parse_mode.map(|s| s.to_string()),
        };

        let response = self.client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| BotError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let description = response.text().await.unwrap_or_default();
            return Err(BotError::Api { status: status.as_u16(), description });
        }

        let data: Response = response
            .json()
            .await
            .map_err(|e| BotError::Parse(e.to_string()))?;

        Ok(data.result.message_id.to_string())
    }

    /// Advertise the command list in the chat client's menu
    pub async fn register_commands(&self) -> Result<(), BotError> {
        #[derive(Serialize)]
        struct BotCommand {
            command: &'static str,
            description: &'static str,
        }

        #[derive(Serialize)]
        struct SetMyCommandsRequest {
            commands: Vec<BotCommand>,
        }

        let commands = Command::ALL
            .iter()
            .map(|c| BotCommand { command: c.name(), description: c.description() })
            .collect();

        let url = self.api_url("setMyCommands");
        let request = SetMyCommandsRequest { commands };

        let response = self.client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| BotError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let error = response.text().await.unwrap_or_default();
            return Err(BotError::Network(format!("Failed to register commands: {}", error)));
        }

        tracing::info!("Registered {} bot commands with Telegram", Command::ALL.len());
        Ok(())
    }
}

#[async_trait]
impl Bot for TelegramAdapter {
    async fn start(&self) -> Result<(), BotError> {
        tracing::info!("Starting Telegram bot (token: {}...)", self.token.chars().take(8).collect::<String>());
        Ok(())
    }

    /// Markdown that Telegram refuses to parse (HTTP 400) is resent as plain
    /// text. Any other failure is returned, since the message may have
    /// been delivered already.
    async fn send_message(&self, chat_id: &str, text: &str, parse_mode: ParseMode) -> Result<String, BotError> {
        tracing::debug!("Sending to {}: {}", chat_id, text);

        let Some(mode) = parse_mode.as_api_str() else {
            return self.send_message_with_format(chat_id, text, None).await;
        };

        match self.send_message_with_format(chat_id, text, Some(mode)).await {
            Err(BotError::Api { status: 400, description }) => {
                tracing::warn!("Markdown rejected, using plain text: {}", description);
                self.send_message_with_format(chat_id, text, None).await
            }
            other => other,
        }
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_becomes_operator() {
        let user = User {
            id: 42,
            username: Some("ops".to_string()),
            first_name: None,
        };
        let op = Operator::from(&user);
        assert_eq!(op.id, "42");
        assert_eq!(op.to_string(), "@ops (42)");
    }

    #[tokio::test]
    async fn test_start_with_multibyte_token() {
        // byte 8 falls inside the third `é`
        let adapter = TelegramAdapter::with_api_base("abcééé:xyz", "http://localhost:9000");
        assert!(adapter.start().await.is_ok());
        let short = TelegramAdapter::with_api_base("ab", "http://localhost:9000");
        assert!(short.start().await.is_ok());
    }

    #[test]
    fn test_api_url() {
        let adapter = TelegramAdapter::with_api_base("123:abc", "http://localhost:9000/");
        assert_eq!(adapter.api_url("getMe"), "http://localhost:9000/bot123:abc/getMe");
    }
}
