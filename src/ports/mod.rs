//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports.
//!
//! This core is a pure read layer, so it carries a single port:
//!
//! - `ProfileReader` - read-only access to users, questions, replies, likes
//!   and follow edges in the storage collaborator.

mod profile_reader;

pub use profile_reader::{ProfileError, ProfileReader};
