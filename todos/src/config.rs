//! Application configuration.
//!
//! The front end embeds a JSON document; any key left out falls back to its
//! default.
//!
//! # Example
//!
//! ```
//! use todos::config::AppConfig;
//! use todos::Filter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_json(r#"{ "initial_filter": "active" }"#)?;
//! assert_eq!(config.initial_filter, Filter::Active);
//! assert_eq!(config.placeholder, "What needs to be done?");
//! # Ok(())
//! # }
//! ```

use crate::types::{Filter, TodoState};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for [`AppConfig`]
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed but is not usable
    #[error("Configuration validation failed: {0}")]
    Invalid(String),
}

/// Front-end configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Page heading
    pub title: String,
    /// Placeholder of the new-todo input
    pub placeholder: String,
    /// Filter selected when the page loads
    pub initial_filter: Filter,
    /// `tracing` filter directives, e.g. `"info,todos=debug"`
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Todo App".to_string(),
            placeholder: "What needs to be done?".to_string(),
            initial_filter: Filter::All,
            log_filter: "info,todos=debug,todos_runtime=debug".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON document
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown keys, and
    /// [`ConfigError::Invalid`] when [`AppConfig::validate`] fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the title or placeholder is blank,
    /// or if `log_filter` is not a valid filter directive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Invalid("title cannot be empty".to_string()));
        }
        if self.placeholder.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "placeholder cannot be empty".to_string(),
            ));
        }
        self.env_filter()?;
        Ok(())
    }

    /// Build the `tracing` filter described by `log_filter`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the directives do not parse.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_filter)
            .map_err(|e| ConfigError::Invalid(format!("log_filter `{}`: {e}", self.log_filter)))
    }

    /// The state the store starts from
    #[must_use]
    pub fn initial_state(&self) -> TodoState {
        TodoState::with_filter(self.initial_filter)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn initial_state_uses_filter() {
        let config = AppConfig::from_json(r#"{"initial_filter":"completed"}"#).unwrap();
        let state = config.initial_state();
        assert_eq!(state.filter, Filter::Completed);
        assert!(state.items.is_empty());
        assert!(state.draft.is_empty());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = AppConfig::from_json(r#"{"colour":"blue"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_filter_is_rejected() {
        let err = AppConfig::from_json(r#"{"initial_filter":"done"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn blank_placeholder_is_invalid() {
        let err = AppConfig::from_json(r#"{"placeholder":"  "}"#).unwrap_err();
        assert!(err.to_string().contains("placeholder cannot be empty"));
    }

    #[test]
    fn bad_log_filter_is_invalid() {
        let err = AppConfig::from_json(r#"{"log_filter":"todos=loud"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
