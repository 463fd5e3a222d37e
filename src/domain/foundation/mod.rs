//! Foundation value objects shared across the domain.

mod ids;
mod role;

pub use ids::{LikeId, QuestionId, ReplyId, UserId};
pub use role::Role;
