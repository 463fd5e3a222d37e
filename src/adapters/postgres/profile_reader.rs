//! PostgreSQL implementation of ProfileReader.
//!
//! Every counter runs as its own aggregate query so the numbers stay correct
//! regardless of how list endpoints are filtered or paginated elsewhere. The
//! polymorphic like reference lives in two columns, `target_kind` and
//! `target_id`; the discriminator is always part of the join condition.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{LikeId, QuestionId, ReplyId, Role, UserId};
use crate::domain::profile::{
    LikeRecord, LikeTarget, LikedAuthor, LikedQuestion, LikedReply, QuestionDigest, QuestionItem,
    ReplyWithQuestion, UserAccount, UserSummary,
};
use crate::ports::{ProfileError, ProfileReader};

/// PostgreSQL implementation of ProfileReader.
#[derive(Clone)]
pub struct PostgresProfileReader {
    pool: PgPool,
}

impl PostgresProfileReader {
    /// Creates a new PostgresProfileReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn scalar_count(&self, sql: &str, user_id: UserId) -> Result<i64, ProfileError> {
        let row = sqlx::query(sql)
            .bind(user_id.as_i64())
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("count"))
    }
}

#[async_trait]
impl ProfileReader for PostgresProfileReader {
    async fn find_user(&self, user_id: UserId) -> Result<Option<UserAccount>, ProfileError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, role, avatar, introduction
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| UserAccount {
            id: UserId::from_i64(r.get("id")),
            name: r.get("name"),
            role: role_from_row(&r),
            avatar: r.get("avatar"),
            introduction: r.get("introduction"),
        }))
    }

    async fn count_questions(&self, user_id: UserId) -> Result<i64, ProfileError> {
        self.scalar_count(
            r#"
            SELECT COUNT(*) AS count FROM questions WHERE user_id = $1
            "#,
            user_id,
        )
        .await
    }

    async fn count_replies_received(&self, user_id: UserId) -> Result<i64, ProfileError> {
        self.scalar_count(
            r#"
            SELECT COUNT(*) AS count
            FROM questions
            JOIN replies ON replies.question_id = questions.id
            WHERE questions.user_id = $1
            "#,
            user_id,
        )
        .await
    }

    async fn count_likes_received(&self, user_id: UserId) -> Result<i64, ProfileError> {
        // The discriminator makes a single join impossible, so this is the
        // sum of one aggregate per target kind.
        self.scalar_count(
            r#"
            SELECT (
                SELECT COUNT(*)
                FROM questions
                JOIN likes ON likes.target_kind = 'question'
                         AND likes.target_id = questions.id
                WHERE questions.user_id = $1
            ) + (
                SELECT COUNT(*)
                FROM replies
                JOIN likes ON likes.target_kind = 'reply'
                         AND likes.target_id = replies.id
                WHERE replies.user_id = $1
            ) AS count
            "#,
            user_id,
        )
        .await
    }

    async fn count_followers(&self, user_id: UserId) -> Result<i64, ProfileError> {
        self.scalar_count(
            r#"
            SELECT COUNT(*) AS count FROM followships WHERE following_id = $1
            "#,
            user_id,
        )
        .await
    }

    async fn count_followings(&self, user_id: UserId) -> Result<i64, ProfileError> {
        self.scalar_count(
            r#"
            SELECT COUNT(*) AS count FROM followships WHERE follower_id = $1
            "#,
            user_id,
        )
        .await
    }

    async fn list_public_questions(
        &self,
        user_id: UserId,
    ) -> Result<Vec<QuestionItem>, ProfileError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, description, grade, subject, created_at
            FROM questions
            WHERE user_id = $1 AND is_anonymous = FALSE
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| QuestionItem {
                id: QuestionId::from_i64(r.get("id")),
                user_id: UserId::from_i64(r.get("user_id")),
                description: r.get("description"),
                grade: r.get("grade"),
                subject: r.get("subject"),
                created_at: r.get::<DateTime<Utc>, _>("created_at"),
            })
            .collect())
    }

    async fn list_replies_with_question(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ReplyWithQuestion>, ProfileError> {
        let rows = sqlx::query(
            r#"
            SELECT replies.id, replies.question_id, replies.comment, replies.created_at,
                   questions.description, questions.grade, questions.subject
            FROM replies
            JOIN questions ON questions.id = replies.question_id
            WHERE replies.user_id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                let question_id = QuestionId::from_i64(r.get("question_id"));
                ReplyWithQuestion {
                    id: ReplyId::from_i64(r.get("id")),
                    question_id,
                    comment: r.get("comment"),
                    created_at: r.get::<DateTime<Utc>, _>("created_at"),
                    question: QuestionDigest {
                        id: question_id,
                        description: r.get("description"),
                        grade: r.get("grade"),
                        subject: r.get("subject"),
                    },
                }
            })
            .collect())
    }

    async fn list_like_records(&self, user_id: UserId) -> Result<Vec<LikeRecord>, ProfileError> {
        let rows = sqlx::query(
            r#"
            SELECT id, target_kind, target_id, created_at
            FROM likes
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        let mut records = Vec::with_capacity(rows.len());
        for r in rows {
            let id = LikeId::from_i64(r.get("id"));
            let target_id: i64 = r.get("target_id");
            let target = match r.get::<&str, _>("target_kind") {
                "question" => LikeTarget::Question(QuestionId::from_i64(target_id)),
                "reply" => LikeTarget::Reply(ReplyId::from_i64(target_id)),
                other => {
                    // The CHECK constraint should make this unreachable.
                    tracing::warn!(like_id = %id, kind = other, "unknown like target kind");
                    continue;
                }
            };
            records.push(LikeRecord {
                id,
                target,
                created_at: r.get::<DateTime<Utc>, _>("created_at"),
            });
        }
        Ok(records)
    }

    async fn find_liked_question(
        &self,
        question_id: QuestionId,
    ) -> Result<Option<LikedQuestion>, ProfileError> {
        let row = sqlx::query(
            r#"
            SELECT questions.id, questions.description, questions.is_anonymous,
                   questions.grade, questions.subject,
                   users.id AS author_id, users.name AS author_name,
                   users.role AS author_role, users.avatar AS author_avatar
            FROM questions
            JOIN users ON users.id = questions.user_id
            WHERE questions.id = $1
            "#,
        )
        .bind(question_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| LikedQuestion {
            id: QuestionId::from_i64(r.get("id")),
            description: r.get("description"),
            is_anonymous: r.get("is_anonymous"),
            grade: r.get("grade"),
            subject: r.get("subject"),
            author: author_from_row(&r),
        }))
    }

    async fn find_liked_reply(
        &self,
        reply_id: ReplyId,
    ) -> Result<Option<LikedReply>, ProfileError> {
        let row = sqlx::query(
            r#"
            SELECT replies.id, replies.question_id, replies.comment, replies.created_at,
                   users.id AS author_id, users.name AS author_name,
                   users.role AS author_role, users.avatar AS author_avatar
            FROM replies
            JOIN users ON users.id = replies.user_id
            WHERE replies.id = $1
            "#,
        )
        .bind(reply_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| LikedReply {
            id: ReplyId::from_i64(r.get("id")),
            question_id: QuestionId::from_i64(r.get("question_id")),
            comment: r.get("comment"),
            created_at: r.get::<DateTime<Utc>, _>("created_at"),
            author: author_from_row(&r),
        }))
    }

    async fn list_followers(&self, user_id: UserId) -> Result<Vec<UserSummary>, ProfileError> {
        let rows = sqlx::query(
            r#"
            SELECT users.id, users.name, users.role, users.avatar
            FROM followships
            JOIN users ON users.id = followships.follower_id
            WHERE followships.following_id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(summary_from_row).collect())
    }

    async fn list_followings(&self, user_id: UserId) -> Result<Vec<UserSummary>, ProfileError> {
        let rows = sqlx::query(
            r#"
            SELECT users.id, users.name, users.role, users.avatar
            FROM followships
            JOIN users ON users.id = followships.following_id
            WHERE followships.follower_id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(summary_from_row).collect())
    }
}

fn role_from_row(row: &PgRow) -> Role {
    Role::from_db_str(row.get("role"))
}

fn summary_from_row(row: &PgRow) -> UserSummary {
    UserSummary {
        id: UserId::from_i64(row.get("id")),
        name: row.get("name"),
        role: Role::from_db_str(row.get("role")),
        avatar: row.get("avatar"),
    }
}

fn author_from_row(row: &PgRow) -> LikedAuthor {
    LikedAuthor {
        id: Some(UserId::from_i64(row.get("author_id"))),
        name: row.get("author_name"),
        role: Some(Role::from_db_str(row.get("author_role"))),
        avatar: row.get("author_avatar"),
    }
}
