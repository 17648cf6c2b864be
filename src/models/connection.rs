// ABOUTME: Connection model linking one coach to one player
// ABOUTME: ConnectionStatus closed set covering the invite approval lifecycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gambit Chess Coaching

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ConnectionId, UserId};
use crate::errors::SchemaError;

/// Approval state of a coach-player connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    /// Invite sent, waiting for the player to accept
    #[default]
    Pending,
    /// Both sides confirmed; assignments and messages may flow
    Accepted,
    /// Ended by either side
    Revoked,
}

impl ConnectionStatus {
    /// Convert to the canonical string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Revoked => "revoked",
        }
    }

    /// Whether the connection is active
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl FromStr for ConnectionStatus {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "revoked" => Ok(Self::Revoked),
            other => Err(SchemaError::InvalidConnectionStatus(other.to_owned())),
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A coach-player relationship
///
/// `coach_id` refers to a [`super::User`] with the coach role and
/// `player_id` to one with the player role; the service layer enforces
/// both. How invites are delivered and accepted is out of scope here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Unique connection identifier
    pub id: ConnectionId,
    /// The coach side of the relationship
    pub coach_id: UserId,
    /// The player side of the relationship
    pub player_id: UserId,
    /// Current approval state
    pub status: ConnectionStatus,
    /// One-time token embedded in the invite link, if one was issued
    pub invite_token: Option<String>,
    /// When the connection record was created
    pub created_at: DateTime<Utc>,
}

impl Connection {
    /// Create a new connection in the pending state
    #[must_use]
    pub fn new(coach_id: UserId, player_id: UserId) -> Self {
        Self {
            id: ConnectionId::new(),
            coach_id,
            player_id,
            status: ConnectionStatus::Pending,
            invite_token: None,
            created_at: Utc::now(),
        }
    }

    /// Attach an invite token
    #[must_use]
    pub fn with_invite_token(mut self, invite_token: String) -> Self {
        self.invite_token = Some(invite_token);
        self
    }
}
