// ABOUTME: Message model for coach-player conversation inside a connection
// ABOUTME: Messages reference their connection and sender by id only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gambit Chess Coaching

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ConnectionId, MessageId, UserId};

/// A message sent within a coach-player connection
///
/// `sender_id` is one of the two users on the connection; the service
/// layer authorizes senders, this crate only records them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier
    pub id: MessageId,
    /// Connection this message belongs to
    pub connection_id: ConnectionId,
    /// User who sent the message
    pub sender_id: UserId,
    /// Message text
    pub body: String,
    /// When the message was sent
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new message with a fresh id
    #[must_use]
    pub fn new(connection_id: ConnectionId, sender_id: UserId, body: String) -> Self {
        Self {
            id: MessageId::new(),
            connection_id,
            sender_id,
            body,
            created_at: Utc::now(),
        }
    }
}
