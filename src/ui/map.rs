// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map collaborator contract.
//!
//! Mirrors the widget surface the web host wraps: a view over a tile
//! layer, markers with popups, and animated re-centering. Click events
//! travel the other way, forwarded by the host to
//! [`SessionController::map_click`](crate::services::session::SessionController::map_click).

use crate::models::workout::{Coordinates, WorkoutKind};

/// Rendering side of the map widget.
pub trait MapView {
    type Marker: MarkerHandle;

    /// Create the view centered on `center` at `zoom`.
    fn create_view(&mut self, center: Coordinates, zoom: u8);

    /// Add the tile layer the view draws.
    fn add_tile_layer(&mut self, style_url: &str, attribution: &str);

    /// Drop a marker at `at` and hand back its handle.
    fn add_marker(&mut self, at: Coordinates) -> Self::Marker;

    /// Re-center the view on `center`.
    fn set_view(&mut self, center: Coordinates, zoom: u8, animation: PanAnimation);
}

/// Handle to one placed marker.
pub trait MarkerHandle {
    fn bind_popup(&mut self, options: PopupOptions);
    fn set_content(&mut self, text: &str);
    fn open(&mut self);
}

/// Popup geometry and styling for a workout marker.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupOptions {
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
    /// Style hook, `"{kind}-popup"`
    pub class_name: String,
}

impl PopupOptions {
    /// The popup the tracker has always used: stays open through other
    /// popups and map clicks, styled by kind.
    pub fn for_kind(kind: WorkoutKind) -> Self {
        Self {
            max_width: 250,
            min_width: 100,
            auto_close: false,
            close_on_click: false,
            class_name: format!("{}-popup", kind.as_str()),
        }
    }
}

/// Animation settings for [`MapView::set_view`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanAnimation {
    pub animate: bool,
    /// Pan duration in seconds
    pub duration_s: f64,
}

impl PanAnimation {
    /// The one-second pan used when jumping to a selected workout.
    pub fn pan() -> Self {
        Self {
            animate: true,
            duration_s: 1.0,
        }
    }
}
