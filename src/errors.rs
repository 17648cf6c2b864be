// ABOUTME: Schema error types for closed-set enumeration parsing
// ABOUTME: SchemaError carries the rejected string for consumer diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gambit Chess Coaching

//! Errors produced when decoding schema values from their string forms.
//!
//! Every enumerated field in this crate is a closed set. Consumers that
//! receive enum values as plain strings (database columns, query params,
//! CLI arguments) parse them via [`str::parse`], which returns one of the
//! variants below for any value outside the declared set. Nothing in this
//! crate defaults or coerces an unknown value.

use thiserror::Error;

/// Errors raised by strict schema parsing
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Value is not one of `coach`, `player`, `admin`
    #[error("Invalid user role: {0}")]
    InvalidUserRole(String),

    /// Value is not one of `pending`, `accepted`, `revoked`
    #[error("Invalid connection status: {0}")]
    InvalidConnectionStatus(String),

    /// Value is not one of `lesson`, `puzzle`
    #[error("Invalid content type: {0}")]
    InvalidContentType(String),

    /// Value is not one of `assigned`, `completed`, `skipped`
    #[error("Invalid assignment status: {0}")]
    InvalidAssignmentStatus(String),
}
