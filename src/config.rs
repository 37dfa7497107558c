//! Configuration management.
//!
//! Loads `~/.shopping-list-bot/config.json`, falling back to environment
//! variables (with an optional `.env` file in the same directory). The bot
//! token is required; a missing token is a fatal startup error reported
//! before any Telegram connection is attempted.

use crate::error::ConfigError;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file path.
pub fn default_config_path() -> PathBuf {
    dirs_config_dir().join("config.json")
}

/// Default list snapshot path.
pub fn default_list_path() -> PathBuf {
    dirs_config_dir().join("list.json")
}

/// Get the bot's config directory path.
fn dirs_config_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".shopping-list-bot"))
        .unwrap_or_else(|| PathBuf::from(".shopping-list-bot"))
}

/// JSON configuration file structure.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    bot_token: String,
    #[serde(default)]
    list_path: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// System hostname, shown in /status
    pub hostname: String,
    /// Telegram bot token
    pub bot_token: String,
    /// Where the list snapshot lives
    pub list_path: PathBuf,
}

impl Config {
    /// Load configuration from the JSON file, falling back to environment
    /// variables.
    ///
    /// Search order:
    /// 1. Provided config_path (if any)
    /// 2. `~/.shopping-list-bot/config.json`
    /// 3. Environment variables (`TELEGRAM_BOT_TOKEN`, `LIST_PATH`)
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if path.exists() {
                return Self::from_json(&path);
            }
        }

        let default_path = default_config_path();
        if default_path.exists() {
            return Self::from_json(&default_path);
        }

        Self::from_env()
    }

    /// Load configuration from a JSON file.
    pub fn from_json(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let file: ConfigFile = serde_json::from_str(&content)?;

        if file.bot_token.is_empty() {
            return Err(ConfigError::MissingField("bot_token".to_string()));
        }

        Ok(Self {
            hostname: get_hostname(),
            bot_token: file.bot_token,
            list_path: file.list_path.unwrap_or_else(default_list_path),
        })
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env if present (silently ignore if not found)
        let _ = dotenvy::from_path(dirs_config_dir().join(".env"));

        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| ConfigError::MissingEnvVar("TELEGRAM_BOT_TOKEN".to_string()))?;

        let list_path = env::var("LIST_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_list_path());

        Ok(Self {
            hostname: get_hostname(),
            bot_token: token,
            list_path,
        })
    }
}

/// Get system hostname.
fn get_hostname() -> String {
    hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_from_json() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        fs::write(
            &config_path,
            r#"{"bot_token":"test_token","list_path":"/tmp/groceries.json"}"#,
        )
        .unwrap();

        let config = Config::from_json(&config_path).unwrap();
        assert_eq!(config.bot_token, "test_token");
        assert_eq!(config.list_path, PathBuf::from("/tmp/groceries.json"));
    }

    #[test]
    fn test_config_default_list_path() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        fs::write(&config_path, r#"{"bot_token":"test_token"}"#).unwrap();

        let config = Config::from_json(&config_path).unwrap();
        assert_eq!(config.list_path, default_list_path());
    }

    #[test]
    fn test_config_missing_token_field() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        fs::write(&config_path, r#"{"list_path":"/tmp/list.json"}"#).unwrap();

        let result = Config::from_json(&config_path);
        assert!(matches!(result, Err(ConfigError::InvalidJson(_))));
    }

    #[test]
    fn test_config_empty_token() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        fs::write(&config_path, r#"{"bot_token":""}"#).unwrap();

        let result = Config::from_json(&config_path);
        assert!(matches!(result, Err(ConfigError::MissingField(_))));
    }

    #[test]
    fn test_config_file_not_found() {
        let result = Config::from_json(Path::new("/nonexistent/path.json"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
