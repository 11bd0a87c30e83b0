//! Characteristic value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One architecture quality attribute from the fixed catalog.
///
/// Characteristics are immutable and identified by name, which is
/// unique within the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Characteristic {
    /// Unique name (e.g., "Scalability").
    pub name: String,
    /// One-sentence description shown on the workshop card.
    pub description: String,
    /// Emoji rendered alongside the name.
    pub emoji: String,
}

impl Characteristic {
    /// Creates a new characteristic.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            emoji: emoji.into(),
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji, self.name)
    }
}
