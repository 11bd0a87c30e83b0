//! Mock recommendation generator for testing.
//!
//! Configurable to return scripted results, simulate latency, and record
//! every request it receives, so tests run without calling a real API.
//!
//! # Example
//!
//! ```ignore
//! let generator = MockGenerator::new()
//!     .with_outcome(MockOutcome::success("Invest in caching."))
//!     .with_delay(Duration::from_millis(50));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::workshop::RecommendationContext;
use crate::ports::{
    GenerationRequest, GeneratorError, GeneratorInfo, RecommendationGenerator, Recommendations,
};

/// A scripted mock result, consumed in order.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Return a successful generation with this body.
    Success(String),
    /// Fail with authentication rejection.
    AuthenticationFailed,
    /// Fail with a rate limit.
    RateLimited { retry_after_secs: u32 },
    /// Fail with a network error.
    Network(String),
    /// Fail with provider unavailability.
    Unavailable(String),
}

impl MockOutcome {
    /// Shorthand for a success outcome.
    pub fn success(body: impl Into<String>) -> Self {
        MockOutcome::Success(body.into())
    }
}

/// Mock recommendation generator.
#[derive(Debug, Clone, Default)]
pub struct MockGenerator {
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    delay: Option<Duration>,
    /// Contexts of every request received, for verification.
    requests: Arc<Mutex<Vec<RecommendationContext>>>,
}

impl MockGenerator {
    /// Creates an empty mock. With no scripted outcomes it answers with
    /// a fixed placeholder body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an outcome.
    pub fn with_outcome(self, outcome: MockOutcome) -> Self {
        if let Ok(mut outcomes) = self.outcomes.lock() {
            outcomes.push_back(outcome);
        }
        self
    }

    /// Simulates latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Contexts of every request received, in order.
    pub fn requests(&self) -> Vec<RecommendationContext> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl RecommendationGenerator for MockGenerator {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<Recommendations, GeneratorError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.context.clone());
        }

        if let Some(delay) = self.delay {
            sleep(delay).await;
        }

        let outcome = self
            .outcomes
            .lock()
            .ok()
            .and_then(|mut outcomes| outcomes.pop_front());

        match outcome {
            None => Ok(Recommendations {
                body: "Mock recommendations".to_string(),
                model: "mock".to_string(),
            }),
            Some(MockOutcome::Success(body)) => Ok(Recommendations {
                body,
                model: "mock".to_string(),
            }),
            Some(MockOutcome::AuthenticationFailed) => Err(GeneratorError::AuthenticationFailed),
            Some(MockOutcome::RateLimited { retry_after_secs }) => {
                Err(GeneratorError::rate_limited(retry_after_secs))
            }
            Some(MockOutcome::Network(message)) => Err(GeneratorError::network(message)),
            Some(MockOutcome::Unavailable(message)) => Err(GeneratorError::unavailable(message)),
        }
    }

    fn info(&self) -> GeneratorInfo {
        GeneratorInfo::new("mock", "mock")
    }
}
