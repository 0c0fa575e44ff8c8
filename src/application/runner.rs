//! Message loops - poll a transport, dispatch, reply, act on lifecycle requests

use std::time::Duration;

use crate::application::errors::BotError;
use crate::application::messaging::MessageDispatcher;
use crate::domain::entities::{Message, Operator, Reply};
use crate::domain::traits::Bot;
use crate::infrastructure::adapters::console::{ConsoleAdapter, CONSOLE_CHAT};
use crate::infrastructure::adapters::telegram::TelegramAdapter;
use crate::infrastructure::process::ProcessController;

/// Seconds Telegram holds a getUpdates call open
pub const POLL_TIMEOUT_SECS: i64 = 30;

/// Pause after a failed poll
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Long-poll Telegram until the shutdown token fires.
///
/// Updates are handled one at a time, in order. A failing command is logged
/// and gets no reply. A reply that carries a lifecycle action confirms the
/// update offset first, then hands the action to `controller`.
pub async fn run_telegram(
    bot: &TelegramAdapter,
    dispatcher: &MessageDispatcher,
    controller: &ProcessController,
) -> Result<(), BotError> {
    tracing::info!("Bot started: @{}", bot.bot_info().username);

    let shutdown = controller.shutdown_token();
    let mut offset: i64 = 0;

    tracing::info!("Starting message loop...");

    loop {
        let updates = tokio::select! {
            _ = shutdown.cancelled() => break,
            updates = bot.get_updates(offset, POLL_TIMEOUT_SECS) => updates,
        };

        let updates = match updates {
            Ok(updates) => updates,
            Err(e) => {
                tracing::error!("Failed to get updates: {}", e);
                tokio::select! {
                    _ = shutdown.cancelled() => break,
                    _ = tokio::time::sleep(RETRY_DELAY) => continue,
                }
            }
        };

        for update in &updates {
            offset = offset.max(update.update_id + 1);

            let Some(msg) = &update.message else { continue };
            let Some(text) = &msg.text else { continue };
            let sender = msg.from.as_ref().map(Operator::from);
            let message = dispatcher.parse(msg.chat.id.to_string(), text, sender);

            let Some(reply) = handle(bot, dispatcher, &message).await else { continue };

            if let Some(action) = reply.then {
                // The process ends before the next poll would confirm this update
                if let Err(e) = bot.acknowledge(offset).await {
                    tracing::warn!("Failed to acknowledge update {}: {}", update.update_id, e);
                }
                controller.apply(action);
                break;
            }
        }

        if controller.is_stopping() {
            break;
        }
    }

    Ok(())
}

/// Read commands from stdin until EOF or shutdown
pub async fn run_console(
    bot: &ConsoleAdapter,
    dispatcher: &MessageDispatcher,
    controller: &ProcessController,
) -> Result<(), BotError> {
    let shutdown = controller.shutdown_token();
    let sender = Some(Operator::new(CONSOLE_CHAT));

    loop {
        let line = tokio::select! {
            _ = shutdown.cancelled() => break,
            line = bot.read_line() => line?,
        };
        let Some(input) = line else { break };
        if input.is_empty() {
            continue;
        }

        let message = dispatcher.parse(CONSOLE_CHAT, &input, sender.clone());
        if let Some(action) = handle(bot, dispatcher, &message).await.and_then(|r| r.then) {
            controller.apply(action);
        }
    }

    Ok(())
}

/// Dispatch one message and send its reply, if any
async fn handle<B: Bot>(bot: &B, dispatcher: &MessageDispatcher, message: &Message) -> Option<Reply> {
    let reply = match dispatcher.dispatch(message).await {
        Ok(reply) => reply?,
        Err(e) => {
            tracing::error!("[{}] Command failed in chat {}: {}", message.id, message.chat_id, e);
            return None;
        }
    };

    deliver(bot, &message.chat_id, &reply).await;
    tracing::debug!("[{}] Handled in {} ms", message.id, message.age().num_milliseconds());
    Some(reply)
}

async fn deliver<B: Bot>(bot: &B, chat_id: &str, reply: &Reply) {
    tracing::info!("Sending response to chat_id {}: {}", chat_id, reply.text.chars().take(100).collect::<String>());
    if let Err(e) = bot.send_message(chat_id, &reply.text, reply.parse_mode).await {
        tracing::error!("Failed to send message: {}", e);
    }
}
