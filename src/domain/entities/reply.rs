/// How the chat platform should render a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    #[default]
    Plain,
    Markdown,
}

impl ParseMode {
    /// Value of Telegram's `parse_mode` field
    pub fn as_api_str(&self) -> Option<&'static str> {
        match self {
            ParseMode::Plain => None,
            ParseMode::Markdown => Some("Markdown"),
        }
    }
}

/// What happens to the process after the reply has been delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Hard exit, the supervisor relaunches the bot
    Restart,
    /// Normal shutdown, an external schedule relaunches the bot
    Stop,
}

/// One outgoing reply to one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub parse_mode: ParseMode,
    pub then: Option<Lifecycle>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parse_mode: ParseMode::Plain,
            then: None,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            parse_mode: ParseMode::Markdown,
            ..Self::text(text)
        }
    }

    pub fn then(mut self, action: Lifecycle) -> Self {
        self.then = Some(action);
        self
    }
}
