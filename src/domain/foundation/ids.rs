//! Strongly-typed identifier value objects.
//!
//! The storage collaborator uses BIGINT surrogate keys, so every id wraps an
//! `i64`. Wrapping keeps a question id from being passed where a user id is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an id from a raw storage key.
            pub const fn from_i64(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw storage key.
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id! {
    /// Unique identifier for a user account.
    UserId
}

define_id! {
    /// Unique identifier for a question.
    QuestionId
}

define_id! {
    /// Unique identifier for a reply.
    ReplyId
}

define_id! {
    /// Unique identifier for a like record.
    LikeId
}
