//! Anonymity redaction for the engagement feed.

use super::views::{LikedAuthor, LikedItem, LikedTarget};

/// Display name substituted for the author of an anonymous question.
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// Placeholder avatar substituted for the author of an anonymous question.
pub const ANONYMOUS_AVATAR: &str = "https://i.imgur.com/YOTISNv.jpg";

/// Replaces the author of an anonymous liked question with the fixed
/// placeholder identity.
///
/// Applied after the projection is fully assembled so the record shape stays
/// uniform for consumers. Only the question branch is touched: reply authors
/// and the liker's own identity pass through untouched, and a non-anonymous
/// question keeps its real author.
pub fn redact_if_anonymous(item: &mut LikedItem) {
    if let LikedTarget::Question(question) = &mut item.target {
        if question.is_anonymous {
            question.author = LikedAuthor {
                id: None,
                name: ANONYMOUS_NAME.to_string(),
                role: None,
                avatar: Some(ANONYMOUS_AVATAR.to_string()),
            };
        }
    }
}
