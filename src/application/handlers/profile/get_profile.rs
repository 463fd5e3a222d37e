//! GetProfileHandler - visible user record plus the five live counters.

use std::sync::Arc;

use crate::application::handlers::profile::guard::require_visible_user;
use crate::domain::foundation::UserId;
use crate::domain::profile::{ProfileStats, ProfileView};
use crate::ports::{ProfileError, ProfileReader};

/// Query to get a user's profile with derived statistics.
#[derive(Debug, Clone, Copy)]
pub struct GetProfileQuery {
    pub user_id: UserId,
}

pub struct GetProfileHandler {
    reader: Arc<dyn ProfileReader>,
}

impl GetProfileHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    /// Each counter is an independent aggregate query at call time. The five
    /// sub-queries run concurrently and are not mutually atomic; skew under
    /// concurrent writes elsewhere is acceptable.
    pub async fn handle(&self, query: GetProfileQuery) -> Result<ProfileView, ProfileError> {
        let user = require_visible_user(self.reader.as_ref(), query.user_id).await?;

        let reader = self.reader.as_ref();
        let (question_count, reply_count, liked_count, follower_count, following_count) = tokio::try_join!(
            reader.count_questions(query.user_id),
            reader.count_replies_received(query.user_id),
            reader.count_likes_received(query.user_id),
            reader.count_followers(query.user_id),
            reader.count_followings(query.user_id),
        )?;

        Ok(ProfileView::new(
            user,
            ProfileStats {
                question_count,
                reply_count,
                liked_count,
                follower_count,
                following_count,
            },
        ))
    }
}
