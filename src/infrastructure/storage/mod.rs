//! Read side of the bot log file

use std::path::PathBuf;

use crate::application::errors::LogError;

/// Characters of log returned by `/logs`
pub const LOG_TAIL_CHARS: usize = 3500;

/// Result of reading the log tail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTail {
    /// The log file has not been created yet
    Missing,
    Content(String),
}

/// The append-only log file written by the tracing file layer
#[derive(Debug, Clone)]
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Last `max_chars` characters of the log with surrounding whitespace trimmed.
    ///
    /// A missing file is not an error and is not opened.
    pub async fn tail(&self, max_chars: usize) -> Result<LogTail, LogError> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(LogTail::Missing);
        }

        let bytes = tokio::fs::read(&self.path).await?;
        let data = String::from_utf8_lossy(&bytes);
        Ok(LogTail::Content(last_chars(data.trim(), max_chars).to_string()))
    }
}

/// Suffix of `text` holding at most `max_chars` characters
fn last_chars(text: &str, max_chars: usize) -> &str {
    if max_chars == 0 {
        return "";
    }
    match text.char_indices().rev().nth(max_chars - 1) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_chars_counts_characters_not_bytes() {
        assert_eq!(last_chars("abcdef", 3), "def");
        assert_eq!(last_chars("ab", 3), "ab");
        assert_eq!(last_chars("ab", 0), "");
        assert_eq!(last_chars("🤖 ok", 2), "ok");
        assert_eq!(last_chars("x🤖🤖", 2), "🤖🤖");
    }

    #[tokio::test]
    async fn test_missing_file_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::new(dir.path().join("bot.log"));
        assert_eq!(store.tail(LOG_TAIL_CHARS).await.unwrap(), LogTail::Missing);
    }

    #[tokio::test]
    async fn test_long_log_returns_last_chars_without_trailing_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.log");
        let mut body = "a".repeat(4000);
        body.push_str(&"b".repeat(3500));
        body.push_str("\n\n  \n");
        std::fs::write(&path, &body).unwrap();

        let tail = LogStore::new(&path).tail(LOG_TAIL_CHARS).await.unwrap();
        assert_eq!(tail, LogTail::Content("b".repeat(3500)));
    }

    #[tokio::test]
    async fn test_short_log_is_returned_whole() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.log");
        std::fs::write(&path, "2026-01-01 00:00:00,000 - INFO - started\n").unwrap();

        let tail = LogStore::new(&path).tail(LOG_TAIL_CHARS).await.unwrap();
        assert_eq!(
            tail,
            LogTail::Content("2026-01-01 00:00:00,000 - INFO - started".to_string())
        );
    }

    #[tokio::test]
    async fn test_empty_file_is_empty_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.log");
        std::fs::write(&path, "   \n").unwrap();

        let tail = LogStore::new(&path).tail(LOG_TAIL_CHARS).await.unwrap();
        assert_eq!(tail, LogTail::Content(String::new()));
    }
}
