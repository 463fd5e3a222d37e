//! Application handlers.

pub mod profile;
