//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use crate::application::errors::ConfigError;

/// Bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub bot: BotConfig,
    pub ci: CiConfig,
    pub log: LogConfig,
    pub adapters: AdaptersConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BotConfig {
    pub name: String,
}

/// CI platform settings. Repository coordinates are compiled-in defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CiConfig {
    pub api_base: String,
    pub owner: String,
    pub repo: String,
    pub workflow: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub timeout_secs: u64,
    /// Taken from `GH_TOKEN`, never written by `init-config`
    #[serde(skip_serializing)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LogConfig {
    pub path: PathBuf,
    pub level: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AdaptersConfig {
    pub telegram: TelegramConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TelegramConfig {
    /// Taken from `BOT_TOKEN`, never written by `init-config`
    #[serde(skip_serializing)]
    pub token: Option<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "vps-dashboard-bot".to_string(),
        }
    }
}

impl Default for CiConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            owner: "bykoviaz454-png".to_string(),
            repo: "VPS".to_string(),
            workflow: "bot.yml".to_string(),
            git_ref: "main".to_string(),
            timeout_secs: 15,
            token: None,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("bot.log"),
            level: "info".to_string(),
        }
    }
}

impl CiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_env() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Config file if present, defaults otherwise, then the environment on top.
    pub fn resolve(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            Config::load(path)?
        } else {
            Config::default()
        };
        config.apply_env();
        Ok(config)
    }

    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply `BOT_TOKEN` / `GH_TOKEN` from `lookup`. Values are taken as-is.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("BOT_TOKEN") {
            self.adapters.telegram.token = Some(token);
        }
        if let Some(token) = lookup("GH_TOKEN") {
            self.ci.token = Some(token);
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.ci.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue("ci.timeout-secs must be positive".to_string()));
        }
        if self.log.path.file_name().is_none() {
            return Err(ConfigError::InvalidValue(format!(
                "log.path has no file name: {}",
                self.log.path.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults_match_compiled_in_repository() {
        let config = Config::default();
        assert_eq!(config.ci.owner, "bykoviaz454-png");
        assert_eq!(config.ci.repo, "VPS");
        assert_eq!(config.ci.workflow, "bot.yml");
        assert_eq!(config.ci.git_ref, "main");
        assert_eq!(config.log.path, PathBuf::from("bot.log"));
        assert!(config.ci.token.is_none());
    }

    #[test]
    fn test_env_tokens_are_applied() {
        let env: HashMap<&str, &str> = [("BOT_TOKEN", "123:abc"), ("GH_TOKEN", "")].into();
        let mut config = Config::default();
        config.apply_env_with(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.adapters.telegram.token.as_deref(), Some("123:abc"));
        // Empty values are accepted as-is
        assert_eq!(config.ci.token.as_deref(), Some(""));
    }

    #[test]
    fn test_load_partial_yaml_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ci:\n  repo: other\n  ref: release\n  timeout-secs: 3\nlog:\n  path: logs/bot.log").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.ci.repo, "other");
        assert_eq!(config.ci.git_ref, "release");
        assert_eq!(config.ci.timeout(), Duration::from_secs(3));
        assert_eq!(config.ci.owner, "bykoviaz454-png");
        assert_eq!(config.log.path, PathBuf::from("logs/bot.log"));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ci:\n  timeout-secs: 0").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_resolve_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::resolve(dir.path().join("missing.yaml")).unwrap();
        assert_eq!(config.bot.name, "vps-dashboard-bot");
    }

    #[test]
    fn test_tokens_are_not_serialized() {
        let mut config = Config::default();
        config.ci.token = Some("secret".to_string());
        config.adapters.telegram.token = Some("secret".to_string());

        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(!yaml.contains("secret"));
        assert!(yaml.contains("api-base"));
    }
}
