//! Recommendation generator configuration.

use serde::Deserialize;
use std::time::Duration;

use super::error::ConfigValidationError;

/// Configuration for the external recommendation generator.
///
/// The API key is deliberately absent: it is supplied by the facilitator
/// at generation time and held only in session memory.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the provider API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum tokens to generate per request.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl GeneratorConfig {
    /// Timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validates generator configuration.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigValidationError::InvalidBaseUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.max_tokens == 0 {
            return Err(ConfigValidationError::InvalidMaxTokens);
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_max_tokens() -> u32 {
    2048
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_config_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.model, "claude-sonnet-4-20250514");
        assert_eq!(config.base_url, "https://api.anthropic.com");
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(config.max_tokens, 2048);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validation_rejects_bad_base_url() {
        let config = GeneratorConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidBaseUrl)
        ));
    }

    #[test]
    fn validation_rejects_zero_timeout() {
        let config = GeneratorConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn validation_rejects_zero_max_tokens() {
        let config = GeneratorConfig {
            max_tokens: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidMaxTokens)
        ));
    }
}
