//! Adapters - implementations of port interfaces.
//!
//! - `postgres` - sqlx-backed `ProfileReader`
//! - `http` - axum REST surface

pub mod http;
pub mod postgres;
