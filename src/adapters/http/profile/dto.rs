//! HTTP DTOs for profile endpoints.
//!
//! The profile surface is read-only, so there are only response DTOs. The
//! domain view models are already shaped for serialization and re-exported
//! directly.

pub use crate::domain::profile::{
    LikedAuthor, LikedItem, LikedQuestion, LikedReply, LikedTarget, ProfileStats, ProfileView,
    QuestionDigest, QuestionItem, ReplyWithQuestion, UserSummary,
};

use serde::Serialize;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}
