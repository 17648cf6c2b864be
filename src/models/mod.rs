// ABOUTME: Canonical data models for the Gambit coaching platform
// ABOUTME: Entity identifier newtypes plus re-exports of all entity modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gambit Chess Coaching

//! Entity definitions for the coaching platform.
//!
//! Each entity lives in its own module together with the closed-set
//! enumerations only it uses. Cross-entity references are always by-value
//! identifiers (a [`Connection`] holds a coach's [`UserId`], it does not
//! own a [`User`]), so no entity controls another's lifetime.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod assignment;
mod connection;
mod content;
mod message;
mod session;
mod user;

pub use assignment::{Assignment, AssignmentStatus};
pub use connection::{Connection, ConnectionStatus};
pub use content::{Content, ContentType};
pub use message::Message;
pub use session::Session;
pub use user::{User, UserRole};

/// Declares an opaque string identifier newtype for one entity.
///
/// Identifiers are opaque to every consumer: the platform treats them as
/// unique strings, and only `new()` assumes anything about their shape
/// (fresh ids are minted as UUID v4 strings). Wrapping ids that originate
/// elsewhere goes through `From<String>`.
macro_rules! entity_id {
    ($(#[$docs:meta])* $name:ident) => {
        $(#[$docs])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Mint a fresh identifier as a UUID v4 string
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// View the identifier as a string slice
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

entity_id! {
    /// Unique identifier of a [`User`]
    UserId
}

entity_id! {
    /// Unique identifier of a [`Connection`]
    ConnectionId
}

entity_id! {
    /// Unique identifier of a [`Content`] record
    ContentId
}

entity_id! {
    /// Unique identifier of an [`Assignment`]
    AssignmentId
}

entity_id! {
    /// Unique identifier of a [`Message`]
    MessageId
}

entity_id! {
    /// Unique identifier of a [`Session`]
    SessionId
}
