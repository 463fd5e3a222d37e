//! Profile query handlers, one per read operation.
//!
//! All six handlers start with [`guard::require_visible_user`], the single
//! place where missing and administrative accounts collapse into the same
//! not-found outcome.

pub mod guard;

mod get_profile;
mod list_followers;
mod list_followings;
mod list_likes;
mod list_questions;
mod list_replies;

#[cfg(test)]
pub(crate) mod test_support;

pub use get_profile::{GetProfileHandler, GetProfileQuery};
pub use list_followers::{ListFollowersHandler, ListFollowersQuery};
pub use list_followings::{ListFollowingsHandler, ListFollowingsQuery};
pub use list_likes::{ListLikesHandler, ListLikesQuery};
pub use list_questions::{ListQuestionsHandler, ListQuestionsQuery};
pub use list_replies::{ListRepliesHandler, ListRepliesQuery};
