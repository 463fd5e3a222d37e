//! HTTP routes for profile endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    get_profile, list_followers, list_followings, list_likes, list_questions, list_replies,
    ProfileAppState,
};

/// Creates the profile router with all routes.
pub fn profile_routes(state: ProfileAppState) -> Router {
    Router::new()
        // GET /api/users/:id
        .route("/api/users/:id", get(get_profile))
        // GET /api/users/:id/questions
        .route("/api/users/:id/questions", get(list_questions))
        // GET /api/users/:id/replies
        .route("/api/users/:id/replies", get(list_replies))
        // GET /api/users/:id/likes
        .route("/api/users/:id/likes", get(list_likes))
        // GET /api/users/:id/followers
        .route("/api/users/:id/followers", get(list_followers))
        // GET /api/users/:id/followings
        .route("/api/users/:id/followings", get(list_followings))
        .with_state(state)
}
