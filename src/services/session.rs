// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session controller - the state machine driving one tracker session.
//!
//! Handles the core workflow:
//! 1. Restore persisted history and render its list entries
//! 2. Obtain the user's position and bring the map up
//! 3. Turn map clicks into a pending form
//! 4. Validate submissions, record workouts, render marker and list entry
//! 5. Persist the store after every accepted record
//!
//! Hosts forward UI events (map clicks, form submits, list selections) as
//! method calls; each call runs to completion before the next.

use chrono::Utc;

use crate::config::Config;
use crate::models::form::FormInput;
use crate::models::render::{self, ListEntry};
use crate::models::workout::{Coordinates, Workout};
use crate::services::validate;
use crate::storage::{KeyValueStore, WorkoutStore};
use crate::ui::{LocationProvider, MapView, MarkerHandle, PanAnimation, PopupOptions, UiSurface};

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    /// Initial state, before the position request resolves
    AwaitingLocation,
    /// Map is up; clicks may open the form
    MapReady,
    /// A map click is parked and the form is visible
    AwaitingFormInput { pending_click: Coordinates },
    /// A submission is being processed, transient within [`SessionController::submit`]
    Submitting { pending_click: Coordinates },
    /// Position was denied; map and form stay inert for the rest of the session
    LocationDenied,
}

/// Orchestrates the end-to-end flow around an owned [`WorkoutStore`].
///
/// Every collaborator is an explicit constructor dependency; nothing is
/// shared module state.
pub struct SessionController<M, L, K, U>
where
    M: MapView,
    L: LocationProvider,
    K: KeyValueStore,
    U: UiSurface,
{
    config: Config,
    map: M,
    location: L,
    storage: K,
    ui: U,
    store: WorkoutStore,
    state: SessionState,
}

impl<M, L, K, U> SessionController<M, L, K, U>
where
    M: MapView,
    L: LocationProvider,
    K: KeyValueStore,
    U: UiSurface,
{
    /// The store starts empty until [`start`](Self::start) restores
    /// whatever the persistence slot holds.
    pub fn new(config: Config, map: M, location: L, storage: K, ui: U) -> Self {
        Self {
            config,
            map,
            location,
            storage,
            ui,
            store: WorkoutStore::new(),
            state: SessionState::AwaitingLocation,
        }
    }

    /// Begin the session: restore history, render its list entries, then
    /// request the current position and bring the map up around it.
    ///
    /// On a denied position the user is notified once and the session
    /// degrades: history stays listed, but no map, form, or selection
    /// works until a reset.
    pub fn start(&mut self) {
        if self.state != SessionState::AwaitingLocation {
            tracing::debug!(state = ?self.state, "Ignoring start; session already running");
            return;
        }

        self.store = WorkoutStore::restore(&self.storage, &self.config.storage_key);

        // History is listed before (and regardless of) the map coming up.
        for workout in self.store.all() {
            let entry = ListEntry::from_workout(workout);
            self.ui.render_list_entry(&entry);
        }

        match self.location.request_current_position() {
            Ok(position) => {
                tracing::info!(lat = position.lat, lng = position.lng, "Position acquired");
                self.map.create_view(position, self.config.map_zoom);
                self.map
                    .add_tile_layer(&self.config.tile_url, &self.config.attribution);

                // Markers had to wait for the map.
                for workout in self.store.all() {
                    render_marker(&mut self.map, workout);
                }

                self.state = SessionState::MapReady;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Position request failed; continuing without a map");
                self.ui.notify(&err.to_string());
                self.state = SessionState::LocationDenied;
            }
        }
    }

    /// Map click: park the coordinates and open the form. Clicking again
    /// before submitting simply re-parks the newer position. Ignored
    /// while no map is up.
    pub fn map_click(&mut self, at: Coordinates) {
        match self.state {
            SessionState::MapReady | SessionState::AwaitingFormInput { .. } => {
                self.ui.reveal_form();
                self.state = SessionState::AwaitingFormInput { pending_click: at };
            }
            _ => {
                tracing::debug!(state = ?self.state, "Ignoring map click");
            }
        }
    }

    /// Form submission for the parked map click.
    ///
    /// Rejected input notifies the user once and leaves the form open
    /// with the same parked click, so the attempt can be corrected.
    /// Accepted input appends a record, renders its marker and list
    /// entry, conceals the form, persists the store, and returns to
    /// [`SessionState::MapReady`].
    pub fn submit(&mut self, input: FormInput) {
        let SessionState::AwaitingFormInput { pending_click } = self.state else {
            tracing::debug!(state = ?self.state, "Ignoring submit without a parked map click");
            return;
        };
        self.state = SessionState::Submitting { pending_click };

        if let Err(err) = validate::check(&input) {
            tracing::debug!(kind = %input.kind, "Rejected workout input");
            self.ui.notify(&err.to_string());
            self.state = SessionState::AwaitingFormInput { pending_click };
            return;
        }

        let workout = Workout::new(
            pending_click,
            input.distance_km,
            input.duration_min,
            input.details(),
            Utc::now(),
        );
        tracing::info!(id = workout.id(), kind = %workout.kind(), "Recorded workout");

        self.store.append(workout);
        if let Some(workout) = self.store.all().last() {
            render_marker(&mut self.map, workout);
            let entry = ListEntry::from_workout(workout);
            self.ui.render_list_entry(&entry);
        }

        self.ui.conceal_form();
        self.store
            .persist(&mut self.storage, &self.config.storage_key);

        self.state = SessionState::MapReady;
    }

    /// Kind selection changed: swap the cadence/elevation inputs. Purely
    /// presentational, the state machine does not move.
    pub fn toggle_kind(&mut self) {
        self.ui.swap_kind_inputs();
    }

    /// List selection: pan to the record and count the interaction.
    /// Unknown ids (stale list DOM) are a silent no-op.
    pub fn select_workout(&mut self, id: &str) {
        if matches!(
            self.state,
            SessionState::AwaitingLocation | SessionState::LocationDenied
        ) {
            tracing::debug!(state = ?self.state, "Ignoring selection without a map");
            return;
        }

        let Some(workout) = self.store.find_by_id_mut(id) else {
            tracing::debug!(id, "Selected workout no longer exists");
            return;
        };
        workout.register_click();
        let target = workout.coords();
        let clicks = workout.clicks();
        tracing::debug!(id, clicks, "Workout selected");

        self.map
            .set_view(target, self.config.map_zoom, PanAnimation::pan());
    }

    /// Wipe the session: clear the persisted slot, drop the in-memory
    /// records, and return to the initial state. Hosts re-run
    /// [`start`](Self::start) afterwards for a fresh session.
    pub fn reset(&mut self) {
        tracing::info!(count = self.store.len(), "Resetting tracker session");
        self.storage.clear(&self.config.storage_key);
        self.store.clear();
        self.state = SessionState::AwaitingLocation;
    }

    /// Current state, for hosts and tests.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Read access to the records, insertion-ordered.
    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }
}

/// Drop a marker for a record with its popup bound, filled, and opened.
fn render_marker<M: MapView>(map: &mut M, workout: &Workout) {
    let mut marker = map.add_marker(workout.coords());
    marker.bind_popup(PopupOptions::for_kind(workout.kind()));
    marker.set_content(&render::popup_text(workout));
    marker.open();
}
