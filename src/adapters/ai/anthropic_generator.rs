//! Anthropic Generator - RecommendationGenerator against the Claude API.
//!
//! Sends one non-streaming messages request per generation. The API key
//! travels with each request rather than living in the adapter, since
//! the facilitator supplies it at generation time.
//!
//! # Configuration
//!
//! ```ignore
//! let config = AnthropicConfig::default()
//!     .with_model("claude-sonnet-4-20250514")
//!     .with_base_url("https://api.anthropic.com");
//!
//! let generator = AnthropicGenerator::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::ports::{
    GenerationRequest, GeneratorError, GeneratorInfo, RecommendationGenerator, Recommendations,
};

/// Anthropic API version header value.
const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// Configuration for the Anthropic generator.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    /// Model to use (e.g., "claude-sonnet-4-20250514").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            model: "claude-sonnet-4-20250514".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            timeout: Duration::from_secs(60),
            max_tokens: 2048,
        }
    }
}

impl AnthropicConfig {
    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

impl From<&crate::config::GeneratorConfig> for AnthropicConfig {
    fn from(config: &crate::config::GeneratorConfig) -> Self {
        Self {
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
            max_tokens: config.max_tokens,
        }
    }
}

/// Anthropic API implementation of the recommendation generator port.
pub struct AnthropicGenerator {
    config: AnthropicConfig,
    client: Client,
}

impl AnthropicGenerator {
    /// Creates a new Anthropic generator with the given configuration.
    pub fn new(config: AnthropicConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the messages endpoint URL.
    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url)
    }

    /// Converts a generation request to Anthropic's wire format.
    fn to_anthropic_request(&self, request: &GenerationRequest) -> AnthropicRequest {
        AnthropicRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: request.context.render_prompt(),
            }],
        }
    }

    /// Maps a non-success response to a generator error.
    async fn handle_response_status(&self, response: Response) -> Result<Response, GeneratorError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        warn!(status = %status, "anthropic request failed");

        Err(map_error_status(status.as_u16(), &error_body))
    }
}

/// Maps an HTTP status and error body to a generator error.
fn map_error_status(status: u16, error_body: &str) -> GeneratorError {
    match status {
        401 | 403 => GeneratorError::AuthenticationFailed,
        429 => GeneratorError::rate_limited(parse_retry_after(error_body)),
        400 => GeneratorError::InvalidRequest(error_body.to_string()),
        500..=599 => GeneratorError::unavailable(format!("Server error {}: {}", status, error_body)),
        _ => GeneratorError::network(format!("Unexpected status {}: {}", status, error_body)),
    }
}

/// Parses a retry hint out of an error body, defaulting to 60 seconds.
fn parse_retry_after(error_body: &str) -> u32 {
    if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
        if let Some(message) = parsed
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            if let Some(idx) = message.find("try again in ") {
                let rest = &message[idx + 13..];
                let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
                if let Ok(secs) = digits.parse::<u32>() {
                    return secs;
                }
            }
        }
    }
    60
}

#[async_trait]
impl RecommendationGenerator for AnthropicGenerator {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<Recommendations, GeneratorError> {
        let wire_request = self.to_anthropic_request(&request);
        debug!(model = %wire_request.model, "sending recommendation request");

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", request.api_key.expose_secret())
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    GeneratorError::network(format!("Connection failed: {}", e))
                } else {
                    GeneratorError::network(e.to_string())
                }
            })?;

        let response = self.handle_response_status(response).await?;

        let body: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::parse(e.to_string()))?;

        let text = body
            .content
            .iter()
            .filter(|block| block.block_type == "text")
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join("");
        if text.is_empty() {
            return Err(GeneratorError::parse("response contained no text blocks"));
        }

        Ok(Recommendations {
            body: text,
            model: body.model,
        })
    }

    fn info(&self) -> GeneratorInfo {
        GeneratorInfo::new("anthropic", &self.config.model)
    }
}

/// Anthropic messages request body.
#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<AnthropicMessage>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

/// Anthropic messages response body.
#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::workshop::RecommendationContext;
    use secrecy::Secret;

    fn test_request() -> GenerationRequest {
        let context = RecommendationContext {
            system_areas: vec!["Payments".to_string()],
            strategic_goals: vec!["Grow revenue".to_string()],
            characteristics: vec![],
        };
        GenerationRequest::new(Secret::new("sk-ant-test".to_string()), context)
    }

    #[test]
    fn wire_request_uses_configured_model_and_prompt() {
        let generator = AnthropicGenerator::new(
            AnthropicConfig::default()
                .with_model("claude-3-haiku-20240307")
                .with_max_tokens(512),
        );
        let wire = generator.to_anthropic_request(&test_request());

        assert_eq!(wire.model, "claude-3-haiku-20240307");
        assert_eq!(wire.max_tokens, 512);
        assert_eq!(wire.messages.len(), 1);
        assert_eq!(wire.messages[0].role, "user");
        assert!(wire.messages[0].content.contains("- Payments"));
    }

    #[test]
    fn messages_url_joins_base_and_path() {
        let generator = AnthropicGenerator::new(
            AnthropicConfig::default().with_base_url("http://localhost:8099"),
        );
        assert_eq!(generator.messages_url(), "http://localhost:8099/v1/messages");
    }

    #[test]
    fn status_mapping_covers_error_classes() {
        assert!(matches!(
            map_error_status(401, ""),
            GeneratorError::AuthenticationFailed
        ));
        assert!(matches!(
            map_error_status(429, "{}"),
            GeneratorError::RateLimited { retry_after_secs: 60 }
        ));
        assert!(matches!(
            map_error_status(400, "bad"),
            GeneratorError::InvalidRequest(_)
        ));
        assert!(matches!(
            map_error_status(503, ""),
            GeneratorError::Unavailable { .. }
        ));
        assert!(matches!(map_error_status(302, ""), GeneratorError::Network(_)));
    }

    #[test]
    fn retry_after_parsed_from_error_message() {
        let body = r#"{"error": {"message": "Rate limited, try again in 17s"}}"#;
        assert_eq!(parse_retry_after(body), 17);
    }

    #[test]
    fn retry_after_defaults_to_sixty() {
        assert_eq!(parse_retry_after("not json"), 60);
        assert_eq!(parse_retry_after(r#"{"error": {"message": "slow down"}}"#), 60);
    }

    #[test]
    fn response_body_deserializes_text_blocks() {
        let json = r#"{
            "content": [{"type": "text", "text": "Invest in caching."}],
            "model": "claude-sonnet-4-20250514"
        }"#;
        let body: AnthropicResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.content[0].text, "Invest in caching.");
        assert_eq!(body.model, "claude-sonnet-4-20250514");
    }

    #[test]
    fn config_bridges_from_generator_config() {
        let app = crate::config::GeneratorConfig::default();
        let config = AnthropicConfig::from(&app);
        assert_eq!(config.model, app.model);
        assert_eq!(config.base_url, app.base_url);
        assert_eq!(config.timeout, app.timeout());
        assert_eq!(config.max_tokens, app.max_tokens);
    }

    #[test]
    fn info_reports_provider_and_model() {
        let generator = AnthropicGenerator::new(AnthropicConfig::default());
        let info = generator.info();
        assert_eq!(info.name, "anthropic");
        assert_eq!(info.model, "claude-sonnet-4-20250514");
    }
}
