//! View models returned by the profile read API.
//!
//! These are projections over storage rows, already shaped for serialization.
//! None of them carry credentials or other internal columns; the email and
//! password hash of a user row never leave the storage adapter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LikeId, QuestionId, ReplyId, Role, UserId};

/// A user row as visible through the identity guard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    pub name: String,
    pub role: Role,
    pub avatar: Option<String>,
    pub introduction: Option<String>,
}

/// Stable projection of a user used for graph neighbors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub role: Role,
    pub avatar: Option<String>,
}

/// The five derived counters, each computed on read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub question_count: i64,
    pub reply_count: i64,
    pub liked_count: i64,
    pub follower_count: i64,
    pub following_count: i64,
}

/// Full profile response: the visible user plus its live counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileView {
    pub id: UserId,
    pub name: String,
    pub role: Role,
    pub avatar: Option<String>,
    pub introduction: Option<String>,
    #[serde(flatten)]
    pub stats: ProfileStats,
}

impl ProfileView {
    pub fn new(user: UserAccount, stats: ProfileStats) -> Self {
        Self {
            id: user.id,
            name: user.name,
            role: user.role,
            avatar: user.avatar,
            introduction: user.introduction,
            stats,
        }
    }
}

/// A question as listed on its author's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionItem {
    pub id: QuestionId,
    pub user_id: UserId,
    pub description: String,
    pub grade: String,
    pub subject: String,
    pub created_at: DateTime<Utc>,
}

/// Truncated quote of a reply's parent question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDigest {
    pub id: QuestionId,
    pub description: String,
    pub grade: String,
    pub subject: String,
}

/// A reply authored by the user, paired with its parent question digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyWithQuestion {
    pub id: ReplyId,
    pub question_id: QuestionId,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub question: QuestionDigest,
}

/// Polymorphic like target: a discriminator plus the target id.
///
/// Never modeled as one nullable foreign key per kind; resolution dispatches
/// on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum LikeTarget {
    Question(QuestionId),
    Reply(ReplyId),
}

/// A raw like row authored by the user, before target resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRecord {
    pub id: LikeId,
    pub target: LikeTarget,
    pub created_at: DateTime<Utc>,
}

/// Author projection attached to a resolved like target.
///
/// `id` and `role` are optional so the anonymity redaction can blank them
/// while keeping every field present in the serialized record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikedAuthor {
    pub id: Option<UserId>,
    pub name: String,
    pub role: Option<Role>,
    pub avatar: Option<String>,
}

impl LikedAuthor {
    pub fn from_summary(summary: UserSummary) -> Self {
        Self {
            id: Some(summary.id),
            name: summary.name,
            role: Some(summary.role),
            avatar: summary.avatar,
        }
    }
}

/// A liked question with its author projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikedQuestion {
    pub id: QuestionId,
    pub description: String,
    pub is_anonymous: bool,
    pub grade: String,
    pub subject: String,
    pub author: LikedAuthor,
}

/// A liked reply with its author projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikedReply {
    pub id: ReplyId,
    pub question_id: QuestionId,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub author: LikedAuthor,
}

/// Resolved like target, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LikedTarget {
    Question(LikedQuestion),
    Reply(LikedReply),
}

/// One entry of the engagement feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikedItem {
    pub id: LikeId,
    pub created_at: DateTime<Utc>,
    pub target: LikedTarget,
}
