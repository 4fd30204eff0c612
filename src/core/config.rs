use std::env;
use std::str::FromStr;

use tracing_subscriber::filter::LevelFilter;

use crate::errors::MessageError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

impl FromStr for LogFormat {
    type Err = MessageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" => Ok(LogFormat::Text),
            other => Err(MessageError::Config(format!(
                "LOG_FORMAT: expected `json` or `text`, got `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_format: LogFormat,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Json,
            log_level: LevelFilter::INFO,
        }
    }
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error if a set variable holds an unsupported value.
    pub fn from_env() -> Result<Self, MessageError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source; unset keys fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable holds an unsupported value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MessageError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => defaults.log_format,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => value
                .trim()
                .parse::<LevelFilter>()
                .map_err(|e| MessageError::Config(format!("LOG_LEVEL: {e}")))?,
            None => defaults.log_level,
        };

        Ok(Self {
            log_format,
            log_level,
        })
    }
}
