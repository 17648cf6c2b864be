// ABOUTME: Reusable coaching content model (chess lessons and puzzles)
// ABOUTME: ContentType closed set plus optional PGN/FEN notation and metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gambit Chess Coaching

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ContentId, UserId};
use crate::errors::SchemaError;

/// Kind of coaching content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Instructional material, typically an annotated game or theme study
    Lesson,
    /// A position to solve
    Puzzle,
}

impl ContentType {
    /// Convert to the canonical string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lesson => "lesson",
            Self::Puzzle => "puzzle",
        }
    }
}

impl FromStr for ContentType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lesson" => Ok(Self::Lesson),
            "puzzle" => Ok(Self::Puzzle),
            other => Err(SchemaError::InvalidContentType(other.to_owned())),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reusable lesson or puzzle created by a coach
///
/// `pgn` holds full game notation, `fen` a single position. Either, both,
/// or neither may be present; a puzzle usually carries at least a FEN.
/// `metadata` is schema-less and interpreted by consumers only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Unique content identifier
    pub id: ContentId,
    /// User who created the content
    pub creator_id: UserId,
    /// Title shown in content lists
    pub title: String,
    /// Whether this is a lesson or a puzzle
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// Game notation in PGN, if any
    pub pgn: Option<String>,
    /// Board position in FEN, if any
    pub fen: Option<String>,
    /// Free-form key/value metadata, if any
    pub metadata: Option<HashMap<String, serde_json::Value>>,
    /// When the content was created
    pub created_at: DateTime<Utc>,
}

impl Content {
    /// Create new content with a fresh id
    #[must_use]
    pub fn new(creator_id: UserId, title: String, content_type: ContentType) -> Self {
        Self {
            id: ContentId::new(),
            creator_id,
            title,
            content_type,
            pgn: None,
            fen: None,
            metadata: None,
            created_at: Utc::now(),
        }
    }

    /// Set the PGN notation
    #[must_use]
    pub fn with_pgn(mut self, pgn: String) -> Self {
        self.pgn = Some(pgn);
        self
    }

    /// Set the FEN position
    #[must_use]
    pub fn with_fen(mut self, fen: String) -> Self {
        self.fen = Some(fen);
        self
    }

    /// Attach free-form metadata
    #[must_use]
    pub fn with_metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
