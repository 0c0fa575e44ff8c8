use std::fmt;

/// Every command the bot answers to.
///
/// The set is closed: dispatch matches on it exhaustively, so a command
/// cannot be added without also giving it a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Start,
    Help,
    Dashboard,
    Ping,
    Uptime,
    Cpu,
    Ram,
    Disk,
    Os,
    Python,
    Logs,
    Status,
    Run,
    LastBuild,
    Restart,
    Stop,
}

impl Command {
    /// All commands in the order they are advertised to the chat platform.
    pub const ALL: [Command; 16] = [
        Command::Start,
        Command::Help,
        Command::Dashboard,
        Command::Ping,
        Command::Uptime,
        Command::Cpu,
        Command::Ram,
        Command::Disk,
        Command::Os,
        Command::Python,
        Command::Logs,
        Command::Status,
        Command::Run,
        Command::LastBuild,
        Command::Restart,
        Command::Stop,
    ];

    /// Token as typed after the leading slash
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Help => "help",
            Command::Dashboard => "dashboard",
            Command::Ping => "ping",
            Command::Uptime => "uptime",
            Command::Cpu => "cpu",
            Command::Ram => "ram",
            Command::Disk => "disk",
            Command::Os => "os",
            Command::Python => "python",
            Command::Logs => "logs",
            Command::Status => "status",
            Command::Run => "run",
            Command::LastBuild => "lastbuild",
            Command::Restart => "restart",
            Command::Stop => "stop",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Start => "Start the bot",
            Command::Help => "Show help message",
            Command::Dashboard => "Server panel",
            Command::Ping => "Check bot is alive",
            Command::Uptime => "Bot uptime",
            Command::Cpu => "CPU usage",
            Command::Ram => "Memory usage",
            Command::Disk => "Disk usage",
            Command::Os => "Operating system",
            Command::Python => "Runtime version",
            Command::Logs => "Tail of the bot log",
            Command::Status => "Latest workflow status",
            Command::Run => "Start the workflow",
            Command::LastBuild => "Last workflow build",
            Command::Restart => "Restart the bot",
            Command::Stop => "Stop the bot",
        }
    }

    /// Resolve a bare token. Matching is case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == token)
    }

    /// Commands that end the running process once their reply is sent
    pub fn is_lifecycle(&self) -> bool {
        matches!(self, Command::Restart | Command::Stop)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tokens_are_unique() {
        let names: HashSet<&str> = Command::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), Command::ALL.len());
    }

    #[test]
    fn test_every_command_resolves_from_its_token() {
        for cmd in Command::ALL {
            assert_eq!(Command::from_token(cmd.name()), Some(cmd));
        }
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        assert_eq!(Command::from_token("ping"), Some(Command::Ping));
        assert_eq!(Command::from_token("PING"), None);
        assert_eq!(Command::from_token("LastBuild"), None);
    }

    #[test]
    fn test_unknown_token() {
        assert_eq!(Command::from_token("reboot"), None);
        assert_eq!(Command::from_token(""), None);
    }

    #[test]
    fn test_display_has_slash() {
        assert_eq!(Command::LastBuild.to_string(), "/lastbuild");
    }

    #[test]
    fn test_lifecycle_commands() {
        let lifecycle: Vec<Command> = Command::ALL.into_iter().filter(|c| c.is_lifecycle()).collect();
        assert_eq!(lifecycle, vec![Command::Restart, Command::Stop]);
    }
}
