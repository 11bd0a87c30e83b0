//! Recommendation Generator Port - Interface for text-generation providers.
//!
//! The workshop treats recommendation synthesis strictly as black-box
//! request/response I/O: a structured context plus an API key go in,
//! free-text recommendations or an error come out. The core applies no
//! retry policy of its own; manual regeneration is the only retry.

use async_trait::async_trait;
use secrecy::Secret;

use crate::domain::workshop::RecommendationContext;

/// Port for external text-generation providers.
#[async_trait]
pub trait RecommendationGenerator: Send + Sync {
    /// Generates recommendations for one workshop context.
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<Recommendations, GeneratorError>;

    /// Provider information (name, model).
    fn info(&self) -> GeneratorInfo;
}

/// Request for recommendation generation.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// API key for the provider, held only for the duration of the call.
    pub api_key: Secret<String>,
    /// Structured workshop outcome the recommendations are based on.
    pub context: RecommendationContext,
}

impl GenerationRequest {
    /// Creates a new generation request.
    pub fn new(api_key: Secret<String>, context: RecommendationContext) -> Self {
        Self { api_key, context }
    }
}

/// Successful generation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendations {
    /// Free-text recommendation body.
    pub body: String,
    /// Model that produced the text.
    pub model: String,
}

/// Provider information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorInfo {
    /// Provider name (e.g., "anthropic", "mock").
    pub name: String,
    /// Model identifier.
    pub model: String,
}

impl GeneratorInfo {
    /// Creates new generator info.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Generator errors, surfaced to the session as a human-readable message.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// API key was rejected by the provider.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited by the provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The provider rejected the request itself.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },
}

impl GeneratorError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if regenerating might succeed without any change.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GeneratorError::RateLimited { .. }
                | GeneratorError::Unavailable { .. }
                | GeneratorError::Network(_)
                | GeneratorError::Timeout { .. }
        )
    }
}
