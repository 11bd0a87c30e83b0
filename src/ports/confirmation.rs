//! Confirmation Prompt Port - blocking yes/no questions.
//!
//! The core never depends on a particular dialog primitive. Before a
//! destructive mutation (comment deletion) it asks its caller for a
//! boolean answer through this port and applies or discards the change
//! accordingly.

/// Port for blocking yes/no confirmation.
pub trait ConfirmationPrompt {
    /// Asks the user the given question and returns their answer.
    /// Returning false leaves the pending mutation unapplied.
    fn confirm(&self, question: &str) -> bool;
}
