// ABOUTME: User account model shared by coaches, players, and admins
// ABOUTME: UserRole closed set with strict string parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gambit Chess Coaching

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;
use crate::errors::SchemaError;

/// Role of a user on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Creates content and assigns it to connected players
    Coach,
    /// Receives assignments and attends sessions
    Player,
    /// Platform administrator
    Admin,
}

impl UserRole {
    /// Convert to the canonical string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Coach => "coach",
            Self::Player => "player",
            Self::Admin => "admin",
        }
    }
}

impl FromStr for UserRole {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coach" => Ok(Self::Coach),
            "player" => Ok(Self::Player),
            "admin" => Ok(Self::Admin),
            other => Err(SchemaError::InvalidUserRole(other.to_owned())),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user account
///
/// Emails are unique across users; uniqueness is enforced by the
/// persistence layer, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,
    /// Email address, unique across the platform
    pub email: String,
    /// Display name shown in the UI, if the user set one
    pub display_name: Option<String>,
    /// Role determining what the user can do
    pub role: UserRole,
    /// IANA timezone name (e.g. "Europe/Berlin") used to render times
    pub timezone: String,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user account with a fresh id
    #[must_use]
    pub fn new(email: String, role: UserRole, timezone: String) -> Self {
        Self {
            id: UserId::new(),
            email,
            display_name: None,
            role,
            timezone,
            created_at: Utc::now(),
        }
    }

    /// Set the display name
    #[must_use]
    pub fn with_display_name(mut self, display_name: String) -> Self {
        self.display_name = Some(display_name);
        self
    }
}
