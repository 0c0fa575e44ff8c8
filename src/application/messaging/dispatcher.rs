//! Message dispatcher - Routes commands to their handler

use std::sync::Arc;

use crate::application::context::AppContext;
use crate::application::errors::BotError;
use crate::application::services::CommandService;
use crate::domain::entities::{Command, Message, Operator, Reply};
use super::parser::MessageParser;

/// Parses incoming text and runs the matching command.
///
/// Unknown commands and plain text are ignored: no reply, no error.
pub struct MessageDispatcher {
    parser: MessageParser,
    commands: CommandService,
}

impl MessageDispatcher {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self {
            parser: MessageParser::new(),
            commands: CommandService::new(ctx),
        }
    }

    /// Only accept `/cmd@name` mentions of this bot
    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.parser = self.parser.with_bot_username(username);
        self
    }

    pub fn parse(&self, chat_id: impl Into<String>, text: &str, sender: Option<Operator>) -> Message {
        self.parser.parse(chat_id, text, sender)
    }

    /// The command a message maps to, if any
    pub fn resolve(&self, message: &Message) -> Option<Command> {
        message.content.command_name().and_then(Command::from_token)
    }

    pub async fn dispatch(&self, message: &Message) -> Result<Option<Reply>, BotError> {
        let Some(command) = self.resolve(message) else {
            if let Some(name) = message.content.command_name() {
                tracing::debug!("[{}] Ignoring unknown command /{} from {}", message.id, name, message.sender_label());
            }
            return Ok(None);
        };

        // Anyone who can message the bot may run these
        if command.is_lifecycle() || command == Command::Run {
            tracing::warn!(
                "[{}] {} requested by {} in chat {}",
                message.id,
                command,
                message.sender_label(),
                message.chat_id
            );
        } else {
            tracing::info!("[{}] {} from {} in chat {}", message.id, command, message.sender_label(), message.chat_id);
        }

        self.commands.execute(command).await.map(Some)
    }

    /// Parse then dispatch
    pub async fn dispatch_text(
        &self,
        chat_id: impl Into<String>,
        text: &str,
        sender: Option<Operator>,
    ) -> Result<Option<Reply>, BotError> {
        let message = self.parse(chat_id, text, sender);
        self.dispatch(&message).await
    }
}
