// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod metrics;
pub mod session;
pub mod validate;

pub use session::{SessionController, SessionState};
