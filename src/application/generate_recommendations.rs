//! GenerateRecommendationsHandler - the one asynchronous workshop action.
//!
//! Assembles the recommendation context from the session, calls the
//! external generator, and records the outcome on the session. The
//! session's in-flight flag guards against double-submit: while a call
//! is outstanding no second request is issued. A failed call surfaces an
//! error without discarding any session state; retrying means calling
//! again.

use std::sync::Arc;

use secrecy::Secret;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::workshop::{SessionRejection, WorkshopSession};
use crate::ports::{GenerationRequest, GeneratorError, RecommendationGenerator};

/// Error type for recommendation generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// No API key was supplied this session.
    #[error("no API key available; supply one to generate recommendations")]
    MissingApiKey,

    /// The session refused to start the call (e.g., one is in flight).
    #[error(transparent)]
    Rejected(#[from] SessionRejection),

    /// The external call itself failed.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

/// Handler for generating recommendations from a workshop session.
pub struct GenerateRecommendationsHandler {
    generator: Arc<dyn RecommendationGenerator>,
}

impl GenerateRecommendationsHandler {
    pub fn new(generator: Arc<dyn RecommendationGenerator>) -> Self {
        Self { generator }
    }

    /// Stores the API key on the session for reuse, then generates.
    pub async fn handle(
        &self,
        session: &mut WorkshopSession,
        api_key: Secret<String>,
    ) -> Result<String, GenerateError> {
        session.set_api_key(api_key);
        self.regenerate(session).await
    }

    /// Generates using the key already stored on the session.
    pub async fn regenerate(
        &self,
        session: &mut WorkshopSession,
    ) -> Result<String, GenerateError> {
        let api_key = session
            .api_key()
            .cloned()
            .ok_or(GenerateError::MissingApiKey)?;

        session.begin_generation()?;
        let context = session.recommendation_context();
        info!(
            provider = %self.generator.info().name,
            characteristics = context.characteristics.len(),
            "generating recommendations"
        );

        match self
            .generator
            .generate(GenerationRequest::new(api_key, context))
            .await
        {
            Ok(recommendations) => {
                session.complete_generation(recommendations.body.clone());
                Ok(recommendations.body)
            }
            Err(error) => {
                warn!(%error, "recommendation generation failed");
                session.fail_generation(error.to_string());
                Err(error.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockGenerator, MockOutcome};
    use crate::domain::workshop::{GenerationState, SELECTION_LIMIT};

    fn assessing_session() -> WorkshopSession {
        let mut session = WorkshopSession::new();
        session.add_system_area("Payments");
        session.add_strategic_goal("Grow revenue");
        let names: Vec<String> = session
            .catalog()
            .iter()
            .take(SELECTION_LIMIT)
            .map(|c| c.name.clone())
            .collect();
        for name in &names {
            session.toggle_characteristic(name).unwrap();
        }
        session.continue_to_narrow_down().unwrap();
        for name in names.iter().take(3) {
            session.toggle_final_characteristic(name).unwrap();
        }
        session.continue_to_risk_assessment().unwrap();
        session
    }

    fn key() -> Secret<String> {
        Secret::new("sk-ant-test".to_string())
    }

    #[tokio::test]
    async fn successful_generation_records_result() {
        let generator = Arc::new(
            MockGenerator::new().with_outcome(MockOutcome::success("Invest in caching.")),
        );
        let handler = GenerateRecommendationsHandler::new(generator.clone());
        let mut session = assessing_session();

        let body = handler.handle(&mut session, key()).await.unwrap();
        assert_eq!(body, "Invest in caching.");
        assert_eq!(
            session.generation().recommendations(),
            Some("Invest in caching.")
        );
        assert_eq!(generator.request_count(), 1);
    }

    #[tokio::test]
    async fn failure_surfaces_error_and_preserves_session() {
        let generator = Arc::new(
            MockGenerator::new().with_outcome(MockOutcome::Unavailable("down".to_string())),
        );
        let handler = GenerateRecommendationsHandler::new(generator);
        let mut session = assessing_session();

        let result = handler.handle(&mut session, key()).await;
        assert!(matches!(result, Err(GenerateError::Generator(_))));
        assert!(matches!(session.generation(), GenerationState::Failed { .. }));

        // Nothing else is discarded.
        assert_eq!(session.system_areas(), ["Payments"]);
        assert_eq!(session.selection_count(), SELECTION_LIMIT);
        assert_eq!(session.assessment_list().len(), 3);
    }

    #[tokio::test]
    async fn in_flight_call_blocks_second_request() {
        let generator = Arc::new(MockGenerator::new());
        let handler = GenerateRecommendationsHandler::new(generator.clone());
        let mut session = assessing_session();
        session.set_api_key(key());

        // Simulate an outstanding call.
        session.begin_generation().unwrap();

        let result = handler.regenerate(&mut session).await;
        assert!(matches!(
            result,
            Err(GenerateError::Rejected(SessionRejection::GenerationInFlight))
        ));
        // No second network request was issued.
        assert_eq!(generator.request_count(), 0);
    }

    #[tokio::test]
    async fn stored_key_is_reused_for_regeneration() {
        let generator = Arc::new(
            MockGenerator::new()
                .with_outcome(MockOutcome::Network("reset".to_string()))
                .with_outcome(MockOutcome::success("Second attempt.")),
        );
        let handler = GenerateRecommendationsHandler::new(generator.clone());
        let mut session = assessing_session();

        assert!(handler.handle(&mut session, key()).await.is_err());

        // Retry without re-supplying the key.
        let body = handler.regenerate(&mut session).await.unwrap();
        assert_eq!(body, "Second attempt.");
        assert_eq!(generator.request_count(), 2);
    }

    #[tokio::test]
    async fn missing_key_is_rejected_before_any_request() {
        let generator = Arc::new(MockGenerator::new());
        let handler = GenerateRecommendationsHandler::new(generator.clone());
        let mut session = assessing_session();

        let result = handler.regenerate(&mut session).await;
        assert!(matches!(result, Err(GenerateError::MissingApiKey)));
        assert_eq!(generator.request_count(), 0);
        assert_eq!(*session.generation(), GenerationState::Idle);
    }
}
