// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod form;
pub mod render;
pub mod workout;

pub use form::FormInput;
pub use render::{DetailRow, ListEntry};
pub use workout::{Coordinates, DerivedMetric, KindDetails, Workout, WorkoutKind, WorkoutSnapshot};
