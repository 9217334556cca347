// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Geolocation, form, list, and notification contracts.

use crate::error::Result;
use crate::models::render::ListEntry;
use crate::models::workout::Coordinates;

/// Host geolocation capability.
pub trait LocationProvider {
    /// Resolve the current position, or [`AppError::LocationUnavailable`]
    /// when the capability is denied or absent. Called once per session.
    ///
    /// [`AppError::LocationUnavailable`]: crate::error::AppError::LocationUnavailable
    fn request_current_position(&mut self) -> Result<Coordinates>;
}

/// The DOM-side surface around the map: workout form, workout list, and
/// blocking notifications.
pub trait UiSurface {
    /// Show the form. Hosts typically also focus the distance field.
    fn reveal_form(&mut self);

    /// Hide the form and clear its inputs.
    fn conceal_form(&mut self);

    /// Swap which of the cadence/elevation rows is visible. Presentation
    /// only; the session state does not move.
    fn swap_kind_inputs(&mut self);

    /// Append one entry to the workout list.
    fn render_list_entry(&mut self, entry: &ListEntry);

    /// Surface one blocking notification to the user.
    fn notify(&mut self, message: &str);
}
