//! Adapters - Implementations of the ports.
//!
//! - `ai` - recommendation generators (Anthropic HTTP, mock)
//! - `confirmation` - deterministic confirmation prompts

pub mod ai;
pub mod confirmation;

pub use ai::{AnthropicConfig, AnthropicGenerator, MockGenerator, MockOutcome};
pub use confirmation::{FixedConfirmation, RecordingConfirmation};
