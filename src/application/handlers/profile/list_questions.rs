//! ListQuestionsHandler - a user's own non-anonymous questions.

use std::sync::Arc;

use crate::application::handlers::profile::guard::require_visible_user;
use crate::domain::foundation::UserId;
use crate::domain::profile::QuestionItem;
use crate::ports::{ProfileError, ProfileReader};

#[derive(Debug, Clone, Copy)]
pub struct ListQuestionsQuery {
    pub user_id: UserId,
}

/// Lists the questions a user asked under their own name.
///
/// Anonymous questions never appear here even on the author's own profile,
/// while `question_count` on the profile does include them.
pub struct ListQuestionsHandler {
    reader: Arc<dyn ProfileReader>,
}

impl ListQuestionsHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListQuestionsQuery,
    ) -> Result<Vec<QuestionItem>, ProfileError> {
        require_visible_user(self.reader.as_ref(), query.user_id).await?;
        self.reader.list_public_questions(query.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::profile::test_support::MemoryProfileReader;
    use crate::domain::foundation::QuestionId;

    #[tokio::test]
    async fn anonymous_questions_are_omitted() {
        let handler = ListQuestionsHandler::new(Arc::new(MemoryProfileReader::seeded()));
        let questions = handler
            .handle(ListQuestionsQuery {
                user_id: MemoryProfileReader::ALICE_ID,
            })
            .await
            .unwrap();

        // Alice asked two questions; only the public one is listed.
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, QuestionId::from_i64(10));
    }

    #[tokio::test]
    async fn admin_listing_is_not_found() {
        let handler = ListQuestionsHandler::new(Arc::new(MemoryProfileReader::seeded()));
        let err = handler
            .handle(ListQuestionsQuery {
                user_id: MemoryProfileReader::ADMIN_ID,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ProfileError::UserNotFound));
    }

    #[tokio::test]
    async fn listing_twice_returns_identical_rows() {
        let handler = ListQuestionsHandler::new(Arc::new(MemoryProfileReader::seeded()));
        let query = ListQuestionsQuery {
            user_id: MemoryProfileReader::ALICE_ID,
        };
        let first = handler.handle(query).await.unwrap();
        let second = handler.handle(query).await.unwrap();
        assert_eq!(first, second);
    }
}
