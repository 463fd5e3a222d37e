//! HTTP adapters - REST API implementations.

pub mod profile;

pub use profile::{profile_routes, ProfileAppState};
