// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Collaborator contracts for the host UI: map widget, geolocation, form,
//! list, and notifications. The crate calls out through these traits;
//! events come back in as controller method calls.

pub mod map;
pub mod surface;

pub use map::{MapView, MarkerHandle, PanAnimation, PopupOptions};
pub use surface::{LocationProvider, UiSurface};
