// ABOUTME: Library entry point for the Gambit coaching platform schema crate
// ABOUTME: Exposes canonical data models and schema errors shared across layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gambit Chess Coaching

#![deny(unsafe_code)]

//! # Gambit Core
//!
//! Canonical data models for the Gambit chess coaching platform. This crate
//! is the contract shared by every layer that touches platform data: the API
//! server, the database mappers, and the client UIs all represent coaches,
//! players, shared content, assignments, messages, and sessions with exactly
//! these types.
//!
//! The crate is deliberately passive. It declares entity shapes, closed-set
//! enumerations, and serialization behavior - nothing else. Lifecycle rules
//! (who may accept a connection, when an assignment becomes completed, how
//! sessions get scheduled) live in the service layer that consumes these
//! types.
//!
//! ## Conventions
//!
//! - Identifiers are opaque strings wrapped in per-entity newtypes
//!   ([`models::UserId`], [`models::ConnectionId`], ...). Fresh ids are
//!   UUID v4 strings.
//! - Timestamps are [`chrono::DateTime<chrono::Utc>`] and serialize as
//!   ISO-8601 / RFC 3339 strings.
//! - Enumerated fields are closed sets: deserialization and [`str::parse`]
//!   both reject values outside the declared variants.
//! - Optional fields serialize as explicit `null`, never as a missing key.
//!
//! ## Example
//!
//! ```rust
//! use gambit_core::models::{Connection, ConnectionStatus, UserId};
//!
//! let coach = UserId::new();
//! let player = UserId::new();
//! let connection = Connection::new(coach, player);
//! assert_eq!(connection.status, ConnectionStatus::Pending);
//! ```

/// Canonical entity and enumeration definitions
pub mod models;

/// Schema error types for closed-set parsing
pub mod errors;
