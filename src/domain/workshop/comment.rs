//! Discussion comments attached to catalog characteristics.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CommentId, Timestamp};

/// One entry in a characteristic's discussion thread.
///
/// Comments live independently of the wizard phase and of whether
/// the owning characteristic is currently selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique, generated identifier.
    pub id: CommentId,
    /// Comment body, trimmed before storage.
    pub text: String,
    /// When the comment was added.
    pub created_at: Timestamp,
}

impl Comment {
    /// Creates a new comment. The caller is responsible for trimming.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: CommentId::new(),
            text: text.into(),
            created_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_comment_gets_fresh_id() {
        let a = Comment::new("first");
        let b = Comment::new("second");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn comment_preserves_multiline_text() {
        let comment = Comment::new("Line 1\nLine 2\nLine 3");
        assert_eq!(comment.text.lines().count(), 3);
    }
}
