//! Application layer - query handlers.
//!
//! This core exposes read paths only, so there are no command handlers. Each
//! query handler orchestrates the identity guard and the `ProfileReader`
//! port, then shapes the domain view for the HTTP adapter.

pub mod handlers;
