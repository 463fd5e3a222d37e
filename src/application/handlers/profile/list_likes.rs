//! ListLikesHandler - the engagement feed with anonymity redaction.

use std::sync::Arc;

use tracing::warn;

use crate::application::handlers::profile::guard::require_visible_user;
use crate::domain::foundation::UserId;
use crate::domain::profile::{redact_if_anonymous, LikeTarget, LikedItem, LikedTarget};
use crate::ports::{ProfileError, ProfileReader};

#[derive(Debug, Clone, Copy)]
pub struct ListLikesQuery {
    pub user_id: UserId,
}

/// Resolves the user's like rows into their question or reply targets.
///
/// A like whose target no longer resolves is skipped and logged instead of
/// failing the whole listing. Redaction runs on the assembled projection so
/// the record shape stays uniform whether or not the question was anonymous.
pub struct ListLikesHandler {
    reader: Arc<dyn ProfileReader>,
}

impl ListLikesHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: ListLikesQuery) -> Result<Vec<LikedItem>, ProfileError> {
        require_visible_user(self.reader.as_ref(), query.user_id).await?;
        let records = self.reader.list_like_records(query.user_id).await?;

        let mut items = Vec::with_capacity(records.len());
        for record in records {
            let target = match record.target {
                LikeTarget::Question(question_id) => self
                    .reader
                    .find_liked_question(question_id)
                    .await?
                    .map(LikedTarget::Question),
                LikeTarget::Reply(reply_id) => self
                    .reader
                    .find_liked_reply(reply_id)
                    .await?
                    .map(LikedTarget::Reply),
            };

            let Some(target) = target else {
                warn!(
                    like_id = %record.id,
                    target = ?record.target,
                    "skipping like with dangling target"
                );
                continue;
            };

            let mut item = LikedItem {
                id: record.id,
                created_at: record.created_at,
                target,
            };
            redact_if_anonymous(&mut item);
            items.push(item);
        }
        Ok(items)
    }
}
