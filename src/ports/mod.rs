//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the workshop core and the outside world. Adapters implement them.
//!
//! - `RecommendationGenerator` - black-box text-generation collaborator
//! - `ConfirmationPrompt` - yes/no capability requested before
//!   destructive comment deletion

mod confirmation;
mod recommendation_generator;

pub use confirmation::ConfirmationPrompt;
pub use recommendation_generator::{
    GenerationRequest, GeneratorError, GeneratorInfo, RecommendationGenerator, Recommendations,
};
