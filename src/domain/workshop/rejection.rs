//! Rejected user actions.
//!
//! Nothing in the workshop core is fatal: every rejection leaves the
//! session in a valid, continuable state. Rejections carry the
//! user-facing message surfaced by the shell.

use thiserror::Error;

use crate::domain::foundation::{CommentId, RiskId};

use super::WorkshopPhase;

/// A user action the session refused to apply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionRejection {
    /// Attempted to shortlist more characteristics than the cap allows.
    #[error("You can select a maximum of {max} characteristics")]
    SelectionLimit { max: usize },

    /// Characteristic selection requires both prerequisite lists non-empty.
    #[error("Add at least one system area and one strategic goal before selecting characteristics")]
    PrerequisitesUnmet,

    /// Name does not exist in the catalog.
    #[error("Unknown characteristic '{name}'")]
    UnknownCharacteristic { name: String },

    /// Final narrowing only draws from the shortlisted seven.
    #[error("'{name}' is not part of the shortlisted characteristics")]
    NotShortlisted { name: String },

    /// Continuing to the narrowing stage requires a full shortlist.
    #[error("Select exactly {required} characteristics to continue ({selected} selected)")]
    ShortlistIncomplete { selected: usize, required: usize },

    /// The action is not available in the current phase.
    #[error("'{action}' is not available in the {phase} phase")]
    WrongPhase {
        action: &'static str,
        phase: WorkshopPhase,
    },

    /// No risk with the given id exists in this session.
    #[error("No risk with id {id}")]
    RiskNotFound { id: RiskId },

    /// No comment with the given id exists on that characteristic.
    #[error("No comment with id {id}")]
    CommentNotFound { id: CommentId },

    /// A recommendation request is already outstanding.
    #[error("Recommendations are already being generated")]
    GenerationInFlight,
}
