//! Profile view models and display transforms.

mod redaction;
mod truncate;
mod views;

pub use redaction::{redact_if_anonymous, ANONYMOUS_AVATAR, ANONYMOUS_NAME};
pub use truncate::{preview_description, QUESTION_PREVIEW_CHARS};
pub use views::{
    LikeRecord, LikeTarget, LikedAuthor, LikedItem, LikedQuestion, LikedReply, LikedTarget,
    ProfileStats, ProfileView, QuestionDigest, QuestionItem, ReplyWithQuestion, UserAccount,
    UserSummary,
};
