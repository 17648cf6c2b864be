// ABOUTME: Session model for scheduled coach-player meetings
// ABOUTME: Sessions reference their connection by id with optional notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gambit Chess Coaching

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ConnectionId, SessionId};

/// A scheduled meeting between the two sides of a connection
///
/// How sessions are booked, moved, or cancelled is a service-layer
/// concern; this record only carries the agreed time and notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier
    pub id: SessionId,
    /// Connection this session belongs to
    pub connection_id: ConnectionId,
    /// Agreed meeting time
    pub scheduled_at: DateTime<Utc>,
    /// Free-form notes about the session, if any
    pub notes: Option<String>,
}

impl Session {
    /// Create a new session with a fresh id
    #[must_use]
    pub fn new(connection_id: ConnectionId, scheduled_at: DateTime<Utc>) -> Self {
        Self {
            id: SessionId::new(),
            connection_id,
            scheduled_at,
            notes: None,
        }
    }

    /// Attach notes
    #[must_use]
    pub fn with_notes(mut self, notes: String) -> Self {
        self.notes = Some(notes);
        self
    }
}
