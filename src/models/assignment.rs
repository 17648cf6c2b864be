// ABOUTME: Assignment model tracking content handed from a coach to a player
// ABOUTME: AssignmentStatus closed set with completion timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gambit Chess Coaching

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AssignmentId, ContentId, UserId};
use crate::errors::SchemaError;

/// Progress state of an assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// Handed to the player, not yet worked on
    #[default]
    Assigned,
    /// Finished by the player
    Completed,
    /// Declined or abandoned
    Skipped,
}

impl AssignmentStatus {
    /// Convert to the canonical string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::Completed => "completed",
            Self::Skipped => "skipped",
        }
    }

    /// Whether the assignment has reached a final state
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Completed | Self::Skipped)
    }
}

impl FromStr for AssignmentStatus {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assigned" => Ok(Self::Assigned),
            "completed" => Ok(Self::Completed),
            "skipped" => Ok(Self::Skipped),
            other => Err(SchemaError::InvalidAssignmentStatus(other.to_owned())),
        }
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of content assigned by a coach to a player
///
/// Created in the assigned state. The service layer moves it to completed
/// or skipped and is responsible for setting `completed_at` alongside the
/// completed transition; no transition logic lives in this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique assignment identifier
    pub id: AssignmentId,
    /// Content being assigned
    pub content_id: ContentId,
    /// Coach who made the assignment
    pub coach_id: UserId,
    /// Player the content is assigned to
    pub player_id: UserId,
    /// Current progress state
    pub status: AssignmentStatus,
    /// When the assignment was made
    pub assigned_at: DateTime<Utc>,
    /// Deadline set by the coach, if any
    pub due_date: Option<DateTime<Utc>>,
    /// When the player completed it, if they did
    pub completed_at: Option<DateTime<Utc>>,
}

impl Assignment {
    /// Create a new assignment in the assigned state
    #[must_use]
    pub fn new(content_id: ContentId, coach_id: UserId, player_id: UserId) -> Self {
        Self {
            id: AssignmentId::new(),
            content_id,
            coach_id,
            player_id,
            status: AssignmentStatus::Assigned,
            assigned_at: Utc::now(),
            due_date: None,
            completed_at: None,
        }
    }

    /// Set a deadline
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}
