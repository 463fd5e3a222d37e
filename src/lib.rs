//! Askstats - profile and engagement read API for a Q&A community.
//!
//! Serves a user's derived statistics, follow graph and engagement feed as
//! a read-only HTTP surface over the community database.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
