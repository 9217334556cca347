// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared across the tracker core.

/// Application error type covering every failure in the session flow.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The location capability is denied or absent. Surfaced to the user
    /// once; the session then runs degraded, without a map.
    #[error("Could not get your position")]
    LocationUnavailable,

    /// A required form field was non-finite or non-positive. The message
    /// is the exact notification text shown to the user.
    #[error("Inputs have to be positive numbers")]
    Validation,

    /// A workout snapshot failed to encode or decode. On restore this is
    /// downgraded to "no history" instead of reaching the user.
    #[error("Workout history serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, AppError>;
