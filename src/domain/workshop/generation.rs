//! Recommendation generation lifecycle.
//!
//! Generation is the only asynchronous operation in a session. A single
//! in-flight flag guards against double-submit: while a request is
//! pending, further invocations are rejected rather than issuing a
//! second concurrent call with stale context.

use serde::{Deserialize, Serialize};

use super::SessionRejection;

/// Lifecycle of the external recommendation call within one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum GenerationState {
    /// No generation has been requested yet (or the last one was cleared).
    #[default]
    Idle,
    /// One request is outstanding; new requests are rejected.
    Pending,
    /// The last request succeeded.
    Complete { recommendations: String },
    /// The last request failed; the session is otherwise untouched.
    Failed { message: String },
}

impl GenerationState {
    /// Returns true while a request is outstanding.
    pub fn is_pending(&self) -> bool {
        matches!(self, GenerationState::Pending)
    }

    /// Marks a request as outstanding, rejecting re-entrant invocations.
    pub fn begin(&mut self) -> Result<(), SessionRejection> {
        if self.is_pending() {
            return Err(SessionRejection::GenerationInFlight);
        }
        *self = GenerationState::Pending;
        Ok(())
    }

    /// Records a successful response.
    pub fn complete(&mut self, recommendations: impl Into<String>) {
        *self = GenerationState::Complete {
            recommendations: recommendations.into(),
        };
    }

    /// Records a failed attempt. The user may retry by regenerating.
    pub fn fail(&mut self, message: impl Into<String>) {
        *self = GenerationState::Failed {
            message: message.into(),
        };
    }

    /// Returns the recommendations text, if the last request succeeded.
    pub fn recommendations(&self) -> Option<&str> {
        match self {
            GenerationState::Complete { recommendations } => Some(recommendations),
            _ => None,
        }
    }
}
