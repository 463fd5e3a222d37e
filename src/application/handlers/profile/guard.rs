//! Identity guard shared by every profile operation.

use crate::domain::foundation::UserId;
use crate::domain::profile::UserAccount;
use crate::ports::{ProfileError, ProfileReader};

/// Resolves a user id to a publicly visible account.
///
/// Missing ids and administrative accounts both surface as
/// [`ProfileError::UserNotFound`] so callers cannot probe for admin
/// existence. Every handler in this module calls this before touching any
/// other read path.
pub async fn require_visible_user(
    reader: &dyn ProfileReader,
    user_id: UserId,
) -> Result<UserAccount, ProfileError> {
    match reader.find_user(user_id).await? {
        Some(user) if !user.role.is_admin() => Ok(user),
        _ => Err(ProfileError::UserNotFound),
    }
}
