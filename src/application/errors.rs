//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    /// The platform answered with a non-success status
    #[error("API error {status}: {description}")]
    Api { status: u16, description: String },

    #[error("CI error: {0}")]
    Ci(#[from] CiError),

    #[error("Log error: {0}")]
    Log(#[from] LogError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors from the CI platform client
#[derive(Error, Debug)]
pub enum CiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Repository has no workflow runs")]
    NoRuns,

    #[error("Request timed out")]
    Timeout,

    #[error("Request cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for CiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CiError::Timeout
        } else if e.is_decode() {
            CiError::Decode(e.to_string())
        } else {
            CiError::Network(e.to_string())
        }
    }
}

/// Log file errors
#[derive(Error, Debug)]
pub enum LogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging already initialized: {0}")]
    Init(String),
}

/// Host telemetry errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("No filesystem mounted at {0}")]
    MountNotFound(String),

    #[error("Cannot stat filesystem at {path}: {reason}")]
    Stat { path: String, reason: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ci_error_converts_into_bot_error() {
        let err: BotError = CiError::Status(502).into();
        assert_eq!(err.to_string(), "CI error: Unexpected HTTP status: 502");
    }

    #[test]
    fn test_missing_mount_message() {
        let err = TelemetryError::MountNotFound("/".to_string());
        assert_eq!(err.to_string(), "No filesystem mounted at /");
    }
}
