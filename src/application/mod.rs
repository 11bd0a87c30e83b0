//! Application layer - command handlers orchestrating domain and ports.

mod generate_recommendations;

pub use generate_recommendations::{GenerateError, GenerateRecommendationsHandler};
