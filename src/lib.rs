// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout tracker core: record running and cycling workouts from map
//! clicks and keep them across reloads.
//!
//! This crate owns the data model, metric derivation, input validation,
//! the ordered store with its persistence round trip, and the session
//! state machine. The map widget, geolocation, form and list DOM, and
//! the key-value slot stay with the host, behind the traits in [`ui`]
//! and [`storage`].

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod ui;

pub use config::Config;
pub use error::{AppError, Result};
pub use services::{SessionController, SessionState};
pub use storage::WorkoutStore;
