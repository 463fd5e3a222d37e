//! In-memory `ProfileReader` fixture shared by handler tests.
//!
//! Aggregates are computed with iterators over plain vectors, so each test
//! can state expectations directly against the seeded rows.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::foundation::{LikeId, QuestionId, ReplyId, Role, UserId};
use crate::domain::profile::{
    LikeRecord, LikeTarget, LikedAuthor, LikedQuestion, LikedReply, QuestionDigest, QuestionItem,
    ReplyWithQuestion, UserAccount, UserSummary,
};
use crate::ports::{ProfileError, ProfileReader};

#[derive(Clone)]
pub struct FixtureQuestion {
    pub id: QuestionId,
    pub user_id: UserId,
    pub description: String,
    pub grade: String,
    pub subject: String,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct FixtureReply {
    pub id: ReplyId,
    pub user_id: UserId,
    pub question_id: QuestionId,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct FixtureLike {
    pub id: LikeId,
    pub user_id: UserId,
    pub target: LikeTarget,
    pub created_at: DateTime<Utc>,
}

/// Fixture-backed reader. `fail` turns every call into a storage fault.
#[derive(Default)]
pub struct MemoryProfileReader {
    pub users: Vec<UserAccount>,
    pub questions: Vec<FixtureQuestion>,
    pub replies: Vec<FixtureReply>,
    pub likes: Vec<FixtureLike>,
    /// Directed edges as (follower, following).
    pub follows: Vec<(UserId, UserId)>,
    pub fail: bool,
}

impl MemoryProfileReader {
    pub const ALICE_ID: UserId = UserId::from_i64(1);
    pub const BOB_ID: UserId = UserId::from_i64(2);
    pub const CAROL_ID: UserId = UserId::from_i64(3);
    pub const ADMIN_ID: UserId = UserId::from_i64(99);

    /// Seeds the dataset used across handler tests:
    ///
    /// - Alice asks two questions (one anonymous); each receives one reply.
    ///   The public one gets 3 likes, the anonymous one 2.
    /// - Carol asks one question and replies to Alice's anonymous one; that
    ///   reply receives one like.
    /// - Bob also likes a question id that no longer resolves.
    /// - Bob and Carol follow Alice; Alice follows Carol; the admin account
    ///   follows Carol.
    pub fn seeded() -> Self {
        let t = |secs: i64| Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap();

        let users = vec![
            user(Self::ALICE_ID, "Alice", Role::Member, Some("alice.png")),
            user(Self::BOB_ID, "Bob", Role::Member, Some("bob.png")),
            user(Self::CAROL_ID, "Carol", Role::Member, None),
            user(Self::ADMIN_ID, "Root", Role::Admin, None),
        ];

        let questions = vec![
            FixtureQuestion {
                id: QuestionId::from_i64(10),
                user_id: Self::ALICE_ID,
                description: "Why does the sky turn red at sunset near the horizon line?".into(),
                grade: "grade 8".into(),
                subject: "physics".into(),
                is_anonymous: false,
                created_at: t(10),
            },
            FixtureQuestion {
                id: QuestionId::from_i64(11),
                user_id: Self::ALICE_ID,
                description: "Embarrassing one".into(),
                grade: "grade 8".into(),
                subject: "biology".into(),
                is_anonymous: true,
                created_at: t(11),
            },
            FixtureQuestion {
                id: QuestionId::from_i64(12),
                user_id: Self::CAROL_ID,
                description: "How do I factor quadratics quickly?".into(),
                grade: "grade 9".into(),
                subject: "math".into(),
                is_anonymous: false,
                created_at: t(12),
            },
        ];

        let replies = vec![
            FixtureReply {
                id: ReplyId::from_i64(20),
                user_id: Self::BOB_ID,
                question_id: QuestionId::from_i64(10),
                comment: "Rayleigh scattering".into(),
                created_at: t(20),
            },
            FixtureReply {
                id: ReplyId::from_i64(21),
                user_id: Self::CAROL_ID,
                question_id: QuestionId::from_i64(11),
                comment: "Happens to everyone".into(),
                created_at: t(21),
            },
            FixtureReply {
                id: ReplyId::from_i64(22),
                user_id: Self::ALICE_ID,
                question_id: QuestionId::from_i64(12),
                comment: "Look for two numbers that multiply to c".into(),
                created_at: t(22),
            },
        ];

        let q = |id: i64| LikeTarget::Question(QuestionId::from_i64(id));
        let r = |id: i64| LikeTarget::Reply(ReplyId::from_i64(id));
        let likes = vec![
            like(30, Self::BOB_ID, q(10), t(30)),
            like(31, Self::CAROL_ID, q(10), t(31)),
            // Same target twice: like rows are not deduplicated.
            like(32, Self::CAROL_ID, q(10), t(32)),
            like(33, Self::BOB_ID, q(11), t(33)),
            like(34, Self::CAROL_ID, q(11), t(34)),
            like(35, Self::BOB_ID, r(21), t(35)),
            // Dangling target: question 999 does not exist.
            like(36, Self::BOB_ID, q(999), t(36)),
        ];

        let follows = vec![
            (Self::BOB_ID, Self::ALICE_ID),
            (Self::CAROL_ID, Self::ALICE_ID),
            (Self::ALICE_ID, Self::CAROL_ID),
            (Self::ADMIN_ID, Self::CAROL_ID),
        ];

        Self {
            users,
            questions,
            replies,
            likes,
            follows,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), ProfileError> {
        if self.fail {
            Err(ProfileError::Database("connection reset".into()))
        } else {
            Ok(())
        }
    }

    fn summary(&self, user_id: UserId) -> Option<UserSummary> {
        self.users.iter().find(|u| u.id == user_id).map(|u| UserSummary {
            id: u.id,
            name: u.name.clone(),
            role: u.role,
            avatar: u.avatar.clone(),
        })
    }
}

fn user(id: UserId, name: &str, role: Role, avatar: Option<&str>) -> UserAccount {
    UserAccount {
        id,
        name: name.into(),
        role,
        avatar: avatar.map(Into::into),
        introduction: None,
    }
}

fn like(id: i64, user_id: UserId, target: LikeTarget, created_at: DateTime<Utc>) -> FixtureLike {
    FixtureLike {
        id: LikeId::from_i64(id),
        user_id,
        target,
        created_at,
    }
}

#[async_trait]
impl ProfileReader for MemoryProfileReader {
    async fn find_user(&self, user_id: UserId) -> Result<Option<UserAccount>, ProfileError> {
        self.check()?;
        Ok(self.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn count_questions(&self, user_id: UserId) -> Result<i64, ProfileError> {
        self.check()?;
        Ok(self.questions.iter().filter(|q| q.user_id == user_id).count() as i64)
    }

    async fn count_replies_received(&self, user_id: UserId) -> Result<i64, ProfileError> {
        self.check()?;
        let count = self
            .replies
            .iter()
            .filter(|r| {
                self.questions
                    .iter()
                    .any(|q| q.id == r.question_id && q.user_id == user_id)
            })
            .count();
        Ok(count as i64)
    }

    async fn count_likes_received(&self, user_id: UserId) -> Result<i64, ProfileError> {
        self.check()?;
        let on_questions = self
            .likes
            .iter()
            .filter(|l| match l.target {
                LikeTarget::Question(qid) => self
                    .questions
                    .iter()
                    .any(|q| q.id == qid && q.user_id == user_id),
                LikeTarget::Reply(_) => false,
            })
            .count();
        let on_replies = self
            .likes
            .iter()
            .filter(|l| match l.target {
                LikeTarget::Reply(rid) => self
                    .replies
                    .iter()
                    .any(|r| r.id == rid && r.user_id == user_id),
                LikeTarget::Question(_) => false,
            })
            .count();
        Ok((on_questions + on_replies) as i64)
    }

    async fn count_followers(&self, user_id: UserId) -> Result<i64, ProfileError> {
        self.check()?;
        Ok(self.follows.iter().filter(|(_, to)| *to == user_id).count() as i64)
    }

    async fn count_followings(&self, user_id: UserId) -> Result<i64, ProfileError> {
        self.check()?;
        Ok(self.follows.iter().filter(|(from, _)| *from == user_id).count() as i64)
    }

    async fn list_public_questions(
        &self,
        user_id: UserId,
    ) -> Result<Vec<QuestionItem>, ProfileError> {
        self.check()?;
        Ok(self
            .questions
            .iter()
            .filter(|q| q.user_id == user_id && !q.is_anonymous)
            .map(|q| QuestionItem {
                id: q.id,
                user_id: q.user_id,
                description: q.description.clone(),
                grade: q.grade.clone(),
                subject: q.subject.clone(),
                created_at: q.created_at,
            })
            .collect())
    }

    async fn list_replies_with_question(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ReplyWithQuestion>, ProfileError> {
        self.check()?;
        Ok(self
            .replies
            .iter()
            .filter(|r| r.user_id == user_id)
            .filter_map(|r| {
                let question = self.questions.iter().find(|q| q.id == r.question_id)?;
                Some(ReplyWithQuestion {
                    id: r.id,
                    question_id: r.question_id,
                    comment: r.comment.clone(),
                    created_at: r.created_at,
                    question: QuestionDigest {
                        id: question.id,
                        description: question.description.clone(),
                        grade: question.grade.clone(),
                        subject: question.subject.clone(),
                    },
                })
            })
            .collect())
    }

    async fn list_like_records(&self, user_id: UserId) -> Result<Vec<LikeRecord>, ProfileError> {
        self.check()?;
        Ok(self
            .likes
            .iter()
            .filter(|l| l.user_id == user_id)
            .map(|l| LikeRecord {
                id: l.id,
                target: l.target,
                created_at: l.created_at,
            })
            .collect())
    }

    async fn find_liked_question(
        &self,
        question_id: QuestionId,
    ) -> Result<Option<LikedQuestion>, ProfileError> {
        self.check()?;
        let Some(question) = self.questions.iter().find(|q| q.id == question_id) else {
            return Ok(None);
        };
        let Some(author) = self.summary(question.user_id) else {
            return Ok(None);
        };
        Ok(Some(LikedQuestion {
            id: question.id,
            description: question.description.clone(),
            is_anonymous: question.is_anonymous,
            grade: question.grade.clone(),
            subject: question.subject.clone(),
            author: LikedAuthor::from_summary(author),
        }))
    }

    async fn find_liked_reply(
        &self,
        reply_id: ReplyId,
    ) -> Result<Option<LikedReply>, ProfileError> {
        self.check()?;
        let Some(reply) = self.replies.iter().find(|r| r.id == reply_id) else {
            return Ok(None);
        };
        let Some(author) = self.summary(reply.user_id) else {
            return Ok(None);
        };
        Ok(Some(LikedReply {
            id: reply.id,
            question_id: reply.question_id,
            comment: reply.comment.clone(),
            created_at: reply.created_at,
            author: LikedAuthor::from_summary(author),
        }))
    }

    async fn list_followers(&self, user_id: UserId) -> Result<Vec<UserSummary>, ProfileError> {
        self.check()?;
        Ok(self
            .follows
            .iter()
            .filter(|(_, to)| *to == user_id)
            .filter_map(|(from, _)| self.summary(*from))
            .collect())
    }

    async fn list_followings(&self, user_id: UserId) -> Result<Vec<UserSummary>, ProfileError> {
        self.check()?;
        Ok(self
            .follows
            .iter()
            .filter(|(from, _)| *from == user_id)
            .filter_map(|(_, to)| self.summary(*to))
            .collect())
    }
}
