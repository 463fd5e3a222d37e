//! Read-only port over the storage collaborator.

use async_trait::async_trait;

use crate::domain::foundation::{QuestionId, ReplyId, UserId};
use crate::domain::profile::{
    LikeRecord, LikedQuestion, LikedReply, QuestionItem, ReplyWithQuestion, UserAccount,
    UserSummary,
};

/// Read-only port for profile queries.
///
/// Every counter method issues its own aggregate query at call time; callers
/// must not derive one counter from a list fetched for another purpose.
/// Implementations hold no state beyond a connection pool, so concurrent
/// requests never coordinate through this port.
#[async_trait]
pub trait ProfileReader: Send + Sync {
    /// Point lookup of a user row. Returns `None` when the id is unknown;
    /// role filtering is the identity guard's job, not the reader's.
    async fn find_user(&self, user_id: UserId) -> Result<Option<UserAccount>, ProfileError>;

    /// Questions authored by the user, anonymous ones included.
    async fn count_questions(&self, user_id: UserId) -> Result<i64, ProfileError>;

    /// Replies attached to questions authored by the user (replies received,
    /// not replies written).
    async fn count_replies_received(&self, user_id: UserId) -> Result<i64, ProfileError>;

    /// Likes targeting the user's questions plus likes targeting the user's
    /// replies, summed across the polymorphic reference.
    async fn count_likes_received(&self, user_id: UserId) -> Result<i64, ProfileError>;

    /// Follow edges where the user is the target.
    async fn count_followers(&self, user_id: UserId) -> Result<i64, ProfileError>;

    /// Follow edges where the user is the source.
    async fn count_followings(&self, user_id: UserId) -> Result<i64, ProfileError>;

    /// Non-anonymous questions authored by the user.
    async fn list_public_questions(
        &self,
        user_id: UserId,
    ) -> Result<Vec<QuestionItem>, ProfileError>;

    /// Replies authored by the user, each joined to its parent question.
    /// Descriptions come back untruncated; truncation is a display transform.
    async fn list_replies_with_question(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ReplyWithQuestion>, ProfileError>;

    /// Raw like rows authored by the user, targets unresolved.
    async fn list_like_records(&self, user_id: UserId) -> Result<Vec<LikeRecord>, ProfileError>;

    /// Resolves a liked question with its author projection. `None` marks a
    /// dangling reference.
    async fn find_liked_question(
        &self,
        question_id: QuestionId,
    ) -> Result<Option<LikedQuestion>, ProfileError>;

    /// Resolves a liked reply with its author projection. `None` marks a
    /// dangling reference.
    async fn find_liked_reply(
        &self,
        reply_id: ReplyId,
    ) -> Result<Option<LikedReply>, ProfileError>;

    /// Users following the given user.
    async fn list_followers(&self, user_id: UserId) -> Result<Vec<UserSummary>, ProfileError>;

    /// Users the given user follows.
    async fn list_followings(&self, user_id: UserId) -> Result<Vec<UserSummary>, ProfileError>;
}

/// Errors that can occur during profile read operations.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// The queried user does not exist or is an administrative account.
    /// The two causes are deliberately indistinguishable.
    #[error("user doesn't exist")]
    UserNotFound,

    /// Storage fault, including query timeouts. Read-only operations are
    /// safe to retry wholesale.
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for ProfileError {
    fn from(err: sqlx::Error) -> Self {
        ProfileError::Database(err.to_string())
    }
}
