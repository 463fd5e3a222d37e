//! ListRepliesHandler - a user's replies with truncated parent questions.

use std::sync::Arc;

use crate::application::handlers::profile::guard::require_visible_user;
use crate::domain::foundation::UserId;
use crate::domain::profile::{preview_description, ReplyWithQuestion};
use crate::ports::{ProfileError, ProfileReader};

#[derive(Debug, Clone, Copy)]
pub struct ListRepliesQuery {
    pub user_id: UserId,
}

/// Lists the replies a user wrote, each quoting its parent question.
pub struct ListRepliesHandler {
    reader: Arc<dyn ProfileReader>,
}

impl ListRepliesHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListRepliesQuery,
    ) -> Result<Vec<ReplyWithQuestion>, ProfileError> {
        require_visible_user(self.reader.as_ref(), query.user_id).await?;
        let mut replies = self.reader.list_replies_with_question(query.user_id).await?;

        // Display transform, applied after fetch.
        for reply in &mut replies {
            reply.question.description = preview_description(&reply.question.description);
        }
        Ok(replies)
    }
}
