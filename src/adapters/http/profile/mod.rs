//! HTTP adapter for the profile read API.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ProfileAppState;
pub use routes::profile_routes;
