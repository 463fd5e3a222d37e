//! ListFollowersHandler - who follows the user.

use std::sync::Arc;

use crate::application::handlers::profile::guard::require_visible_user;
use crate::domain::foundation::UserId;
use crate::domain::profile::UserSummary;
use crate::ports::{ProfileError, ProfileReader};

#[derive(Debug, Clone, Copy)]
pub struct ListFollowersQuery {
    pub user_id: UserId,
}

/// Lists users following the queried user as flat projections.
///
/// The admin gate applies to the queried subject only; neighbors are
/// surfaced whatever their role.
pub struct ListFollowersHandler {
    reader: Arc<dyn ProfileReader>,
}

impl ListFollowersHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListFollowersQuery,
    ) -> Result<Vec<UserSummary>, ProfileError> {
        require_visible_user(self.reader.as_ref(), query.user_id).await?;
        self.reader.list_followers(query.user_id).await
    }
}
