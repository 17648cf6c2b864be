// ABOUTME: Constructor and builder tests for platform entities
// ABOUTME: Validates fresh-id minting, initial states, and optional-field setters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gambit Chess Coaching

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, Utc};
use gambit_core::models::{
    Assignment, AssignmentStatus, Connection, ConnectionStatus, Content, ContentType, User,
    UserId, UserRole,
};
use uuid::Uuid;

#[test]
fn test_fresh_ids_are_unique_uuid_strings() {
    let first = UserId::new();
    let second = UserId::new();

    assert_ne!(first, second);
    assert!(Uuid::parse_str(first.as_str()).is_ok());
}

#[test]
fn test_ids_from_external_strings_are_opaque() {
    let id = UserId::from("legacy-user-42".to_owned());
    assert_eq!(id.as_str(), "legacy-user-42");
    assert_eq!(String::from(id), "legacy-user-42");
}

#[test]
fn test_ids_serialize_transparently() {
    let id = UserId::from("u1".to_owned());
    assert_eq!(serde_json::to_string(&id).unwrap(), r#""u1""#);

    let decoded: UserId = serde_json::from_str(r#""u1""#).unwrap();
    assert_eq!(decoded, id);
}

#[test]
fn test_new_user_has_no_display_name() {
    let user = User::new("anna@example.com".into(), UserRole::Player, "UTC".into());

    assert_eq!(user.display_name, None);
    assert_eq!(user.role, UserRole::Player);
    assert_eq!(user.timezone, "UTC");
}

#[test]
fn test_new_connection_starts_pending_without_token() {
    let connection = Connection::new(UserId::new(), UserId::new());

    assert_eq!(connection.status, ConnectionStatus::Pending);
    assert_eq!(connection.invite_token, None);

    let with_token = connection.with_invite_token("tok_31ad".into());
    assert_eq!(with_token.invite_token.as_deref(), Some("tok_31ad"));
}

#[test]
fn test_new_assignment_starts_assigned_and_open() {
    let content = Content::new(UserId::new(), "Rook Endings".into(), ContentType::Lesson);
    let assignment = Assignment::new(content.id.clone(), UserId::new(), UserId::new());

    assert_eq!(assignment.status, AssignmentStatus::Assigned);
    assert_eq!(assignment.due_date, None);
    assert_eq!(assignment.completed_at, None);
    assert!(!assignment.status.is_closed());
}

#[test]
fn test_assignment_due_date_setter() {
    let due: DateTime<Utc> = "2024-07-01T12:00:00Z".parse().unwrap();
    let assignment = Assignment::new(
        "content-1".to_owned().into(),
        "coach-1".to_owned().into(),
        "player-1".to_owned().into(),
    )
    .with_due_date(due);

    assert_eq!(assignment.due_date, Some(due));
    assert_eq!(assignment.completed_at, None);
}

#[test]
fn test_content_builder_chain() {
    let content = Content::new(UserId::new(), "Smothered Mate".into(), ContentType::Puzzle)
        .with_pgn("1. e4 e5 2. Nf3 Nc6".into())
        .with_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".into());

    assert_eq!(content.content_type, ContentType::Puzzle);
    assert!(content.pgn.is_some());
    assert!(content.fen.is_some());
    assert_eq!(content.metadata, None);
}
