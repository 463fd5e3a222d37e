//! Domain layer - pure types and transforms.
//!
//! No I/O lives here. The profile module holds the view models served by the
//! read API together with the display transforms (anonymity redaction,
//! description truncation) that apply to them.

pub mod foundation;
pub mod profile;
