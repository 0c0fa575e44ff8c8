//! Message parser - Turns raw chat text into structured messages

use regex_lite::Regex;

use crate::domain::entities::{Content, Message, Operator};

/// `/name`, `/name@bot`, optionally followed by arguments
const COMMAND_PATTERN: &str = r"(?s)^/([A-Za-z0-9_]+)(?:@([A-Za-z0-9_]+))?(?:\s+(.*))?$";

/// Parses incoming text into Message objects
pub struct MessageParser {
    pattern: Regex,
    bot_username: Option<String>,
}

impl MessageParser {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(COMMAND_PATTERN).expect("command pattern is a valid regex"),
            bot_username: None,
        }
    }

    /// Commands addressed to another bot (`/cmd@other_bot`) become plain text
    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = Some(username.into());
        self
    }

    pub fn parse(&self, chat_id: impl Into<String>, text: &str, sender: Option<Operator>) -> Message {
        let text = text.trim();
        if text.is_empty() {
            return Message::new(chat_id, Content::Empty).with_sender(sender);
        }

        let content = match self.pattern.captures(text) {
            Some(caps) if self.addressed_to_us(caps.get(2).map(|m| m.as_str())) => {
                let name = caps.get(1).map(|m| m.as_str()).unwrap_or_default().to_string();
                let args = caps
                    .get(3)
                    .map(|m| m.as_str().split_whitespace().map(str::to_string).collect())
                    .unwrap_or_default();
                Content::Command { name, args }
            }
            _ => Content::Text(text.to_string()),
        };

        Message::new(chat_id, content).with_sender(sender)
    }

    fn addressed_to_us(&self, mention: Option<&str>) -> bool {
        match (mention, &self.bot_username) {
            (Some(mention), Some(ours)) => mention.eq_ignore_ascii_case(ours),
            _ => true,
        }
    }
}

impl Default for MessageParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(content: &Content) -> (&str, Vec<&str>) {
        match content {
            Content::Command { name, args } => (name, args.iter().map(String::as_str).collect()),
            other => panic!("expected command, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_command() {
        let msg = MessageParser::new().parse("1", "/dashboard", None);
        assert_eq!(command(&msg.content), ("dashboard", vec![]));
        assert_eq!(msg.chat_id, "1");
    }

    #[test]
    fn test_arguments_are_kept_but_separate() {
        let msg = MessageParser::new().parse("1", "/run now please", None);
        assert_eq!(command(&msg.content), ("run", vec!["now", "please"]));
    }

    #[test]
    fn test_token_case_is_preserved() {
        let msg = MessageParser::new().parse("1", "/PING", None);
        assert_eq!(command(&msg.content), ("PING", vec![]));
    }

    #[test]
    fn test_mention_of_this_bot() {
        let parser = MessageParser::new().with_bot_username("vps_bot");
        let msg = parser.parse("1", "/status@VPS_bot", None);
        assert_eq!(command(&msg.content), ("status", vec![]));
    }

    #[test]
    fn test_mention_of_another_bot_is_text() {
        let parser = MessageParser::new().with_bot_username("vps_bot");
        let msg = parser.parse("1", "/status@other_bot", None);
        assert_eq!(msg.content, Content::Text("/status@other_bot".to_string()));
    }

    #[test]
    fn test_non_commands() {
        let parser = MessageParser::new();
        assert_eq!(parser.parse("1", "hello", None).content, Content::Text("hello".to_string()));
        assert_eq!(parser.parse("1", "/", None).content, Content::Text("/".to_string()));
        assert_eq!(parser.parse("1", "  ", None).content, Content::Empty);
    }

    #[test]
    fn test_sender_is_attached() {
        let msg = MessageParser::new().parse("1", "/ping", Some(Operator::new("9")));
        assert_eq!(msg.sender_label(), "9");
    }
}
