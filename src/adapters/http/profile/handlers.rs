//! HTTP handlers for profile endpoints.
//!
//! These handlers connect Axum routes to the application layer query
//! handlers. Not-found and admin-hidden outcomes share one response body so
//! the API never reveals which of the two occurred.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::profile::{
    GetProfileHandler, GetProfileQuery, ListFollowersHandler, ListFollowersQuery,
    ListFollowingsHandler, ListFollowingsQuery, ListLikesHandler, ListLikesQuery,
    ListQuestionsHandler, ListQuestionsQuery, ListRepliesHandler, ListRepliesQuery,
};
use crate::domain::foundation::UserId;
use crate::ports::{ProfileError, ProfileReader};

use super::dto::{
    ErrorResponse, LikedItem, ProfileView, QuestionItem, ReplyWithQuestion, UserSummary,
};

/// Profile API error that implements IntoResponse.
pub enum ProfileApiError {
    BadRequest(String),
    NotFound,
    Internal(String),
}

impl IntoResponse for ProfileApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ProfileApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ProfileApiError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::not_found("user doesn't exist"),
            ),
            ProfileApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<ProfileError> for ProfileApiError {
    fn from(error: ProfileError) -> Self {
        match error {
            ProfileError::UserNotFound => ProfileApiError::NotFound,
            ProfileError::Database(msg) => {
                ProfileApiError::Internal(format!("Database error: {}", msg))
            }
        }
    }
}

/// Shared application state containing profile dependencies.
#[derive(Clone)]
pub struct ProfileAppState {
    pub profile_reader: Arc<dyn ProfileReader>,
}

impl ProfileAppState {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub fn get_profile_handler(&self) -> GetProfileHandler {
        GetProfileHandler::new(self.profile_reader.clone())
    }

    pub fn list_questions_handler(&self) -> ListQuestionsHandler {
        ListQuestionsHandler::new(self.profile_reader.clone())
    }

    pub fn list_replies_handler(&self) -> ListRepliesHandler {
        ListRepliesHandler::new(self.profile_reader.clone())
    }

    pub fn list_likes_handler(&self) -> ListLikesHandler {
        ListLikesHandler::new(self.profile_reader.clone())
    }

    pub fn list_followers_handler(&self) -> ListFollowersHandler {
        ListFollowersHandler::new(self.profile_reader.clone())
    }

    pub fn list_followings_handler(&self) -> ListFollowingsHandler {
        ListFollowingsHandler::new(self.profile_reader.clone())
    }
}

fn parse_user_id(raw: &str) -> Result<UserId, ProfileApiError> {
    raw.parse()
        .map_err(|_| ProfileApiError::BadRequest("Invalid user ID format".to_string()))
}

/// GET /api/users/:id
///
/// Returns the visible user record together with its five derived counters.
pub async fn get_profile(
    State(state): State<ProfileAppState>,
    Path(user_id_str): Path<String>,
) -> Result<Json<ProfileView>, ProfileApiError> {
    let user_id = parse_user_id(&user_id_str)?;
    let view = state
        .get_profile_handler()
        .handle(GetProfileQuery { user_id })
        .await?;
    Ok(Json(view))
}

/// GET /api/users/:id/questions
pub async fn list_questions(
    State(state): State<ProfileAppState>,
    Path(user_id_str): Path<String>,
) -> Result<Json<Vec<QuestionItem>>, ProfileApiError> {
    let user_id = parse_user_id(&user_id_str)?;
    let questions = state
        .list_questions_handler()
        .handle(ListQuestionsQuery { user_id })
        .await?;
    Ok(Json(questions))
}

/// GET /api/users/:id/replies
pub async fn list_replies(
    State(state): State<ProfileAppState>,
    Path(user_id_str): Path<String>,
) -> Result<Json<Vec<ReplyWithQuestion>>, ProfileApiError> {
    let user_id = parse_user_id(&user_id_str)?;
    let replies = state
        .list_replies_handler()
        .handle(ListRepliesQuery { user_id })
        .await?;
    Ok(Json(replies))
}

/// GET /api/users/:id/likes
pub async fn list_likes(
    State(state): State<ProfileAppState>,
    Path(user_id_str): Path<String>,
) -> Result<Json<Vec<LikedItem>>, ProfileApiError> {
    let user_id = parse_user_id(&user_id_str)?;
    let likes = state
        .list_likes_handler()
        .handle(ListLikesQuery { user_id })
        .await?;
    Ok(Json(likes))
}

/// GET /api/users/:id/followers
pub async fn list_followers(
    State(state): State<ProfileAppState>,
    Path(user_id_str): Path<String>,
) -> Result<Json<Vec<UserSummary>>, ProfileApiError> {
    let user_id = parse_user_id(&user_id_str)?;
    let followers = state
        .list_followers_handler()
        .handle(ListFollowersQuery { user_id })
        .await?;
    Ok(Json(followers))
}

/// GET /api/users/:id/followings
pub async fn list_followings(
    State(state): State<ProfileAppState>,
    Path(user_id_str): Path<String>,
) -> Result<Json<Vec<UserSummary>>, ProfileApiError> {
    let user_id = parse_user_id(&user_id_str)?;
    let followings = state
        .list_followings_handler()
        .handle(ListFollowingsQuery { user_id })
        .await?;
    Ok(Json(followings))
}
