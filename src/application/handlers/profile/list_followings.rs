//! ListFollowingsHandler - who the user follows.

use std::sync::Arc;

use crate::application::handlers::profile::guard::require_visible_user;
use crate::domain::foundation::UserId;
use crate::domain::profile::UserSummary;
use crate::ports::{ProfileError, ProfileReader};

#[derive(Debug, Clone, Copy)]
pub struct ListFollowingsQuery {
    pub user_id: UserId,
}

/// Lists users the queried user follows as flat projections.
pub struct ListFollowingsHandler {
    reader: Arc<dyn ProfileReader>,
}

impl ListFollowingsHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListFollowingsQuery,
    ) -> Result<Vec<UserSummary>, ProfileError> {
        require_visible_user(self.reader.as_ref(), query.user_id).await?;
        self.reader.list_followings(query.user_id).await
    }
}
