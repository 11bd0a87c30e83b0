//! Workshop module - the wizard state machine for one workshop session.
//!
//! A session walks a facilitator through four sequential stages: declare
//! prerequisites (system areas and strategic goals), shortlist seven
//! characteristics, narrow the shortlist to three, and assess risks per
//! finally-selected characteristic. The session exclusively owns all
//! mutable collections for its lifetime; nothing is persisted beyond it.

mod comment;
mod context;
mod generation;
mod phase;
mod rejection;
mod risk;
mod session;

pub use comment::Comment;
pub use context::{CharacteristicContext, RecommendationContext, RiskContext};
pub use generation::GenerationState;
pub use phase::WorkshopPhase;
pub use rejection::SessionRejection;
pub use risk::{Risk, RiskLevel, RiskSeverity};
pub use session::{WorkshopSession, FINAL_SELECTION_TARGET, SELECTION_LIMIT};
