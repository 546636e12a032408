//! Environment-sourced credentials.
//!
//! All three values are required; the bot refuses to start half-configured.

use std::env;
use std::fmt;

/// The three secrets the watcher needs, loaded once at startup.
#[derive(Debug)]
pub struct Config {
    /// OAuth token for the homework review API (`PR_TOKEN`).
    pub practicum_token: String,
    /// Telegram bot token (`TG_TOKEN`).
    pub telegram_token: String,
    /// Recipient chat identifier (`TG_CHAT_ID`).
    pub chat_id: String,
}

/// One or more required environment variables are unset or empty.
#[derive(Debug)]
pub struct ConfigError {
    missing: Vec<&'static str>,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "missing required environment variables: {}",
            self.missing.join(", ")
        )
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        let mut missing = Vec::new();
        let practicum_token = require("PR_TOKEN", &mut missing);
        let telegram_token = require("TG_TOKEN", &mut missing);
        let chat_id = require("TG_CHAT_ID", &mut missing);
        if missing.is_empty() {
            Ok(Config {
                practicum_token,
                telegram_token,
                chat_id,
            })
        } else {
            Err(ConfigError { missing })
        }
    }
}

fn require(name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_lists_every_missing_variable() {
        let error = ConfigError {
            missing: vec!["PR_TOKEN", "TG_CHAT_ID"],
        };
        assert_eq!(
            error.to_string(),
            "missing required environment variables: PR_TOKEN, TG_CHAT_ID"
        );
    }
}
