// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recording collaborator doubles shared by the session flow tests.
//!
//! Each double pushes what it was asked to do onto a shared `Rc<RefCell>`
//! log, so tests keep a handle on the history after the controller takes
//! ownership of its clone.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use workout_tracker::config::Config;
use workout_tracker::error::{AppError, Result};
use workout_tracker::models::render::ListEntry;
use workout_tracker::models::workout::Coordinates;
use workout_tracker::services::session::SessionController;
use workout_tracker::storage::KeyValueStore;
use workout_tracker::ui::{
    LocationProvider, MapView, MarkerHandle, PanAnimation, PopupOptions, UiSurface,
};

/// Everything the map collaborator was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    ViewCreated {
        center: Coordinates,
        zoom: u8,
    },
    TileLayerAdded {
        url: String,
    },
    MarkerAdded {
        at: Coordinates,
    },
    PopupBound {
        class_name: String,
    },
    PopupContent {
        text: String,
    },
    PopupOpened,
    ViewMoved {
        center: Coordinates,
        zoom: u8,
        animated: bool,
    },
}

#[derive(Default, Clone)]
pub struct RecordingMap {
    pub events: Rc<RefCell<Vec<MapEvent>>>,
}

pub struct RecordingMarker {
    events: Rc<RefCell<Vec<MapEvent>>>,
}

impl MapView for RecordingMap {
    type Marker = RecordingMarker;

    fn create_view(&mut self, center: Coordinates, zoom: u8) {
        self.events
            .borrow_mut()
            .push(MapEvent::ViewCreated { center, zoom });
    }

    fn add_tile_layer(&mut self, style_url: &str, _attribution: &str) {
        self.events.borrow_mut().push(MapEvent::TileLayerAdded {
            url: style_url.to_string(),
        });
    }

    fn add_marker(&mut self, at: Coordinates) -> RecordingMarker {
        self.events.borrow_mut().push(MapEvent::MarkerAdded { at });
        RecordingMarker {
            events: Rc::clone(&self.events),
        }
    }

    fn set_view(&mut self, center: Coordinates, zoom: u8, animation: PanAnimation) {
        self.events.borrow_mut().push(MapEvent::ViewMoved {
            center,
            zoom,
            animated: animation.animate,
        });
    }
}

impl MarkerHandle for RecordingMarker {
    fn bind_popup(&mut self, options: PopupOptions) {
        self.events.borrow_mut().push(MapEvent::PopupBound {
            class_name: options.class_name,
        });
    }

    fn set_content(&mut self, text: &str) {
        self.events.borrow_mut().push(MapEvent::PopupContent {
            text: text.to_string(),
        });
    }

    fn open(&mut self) {
        self.events.borrow_mut().push(MapEvent::PopupOpened);
    }
}

/// Geolocation stub with a fixed answer.
pub struct StubLocation {
    coords: Option<Coordinates>,
}

impl StubLocation {
    pub fn granted(lat: f64, lng: f64) -> Self {
        Self {
            coords: Some(Coordinates::new(lat, lng)),
        }
    }

    pub fn denied() -> Self {
        Self { coords: None }
    }
}

impl LocationProvider for StubLocation {
    fn request_current_position(&mut self) -> Result<Coordinates> {
        self.coords.ok_or(AppError::LocationUnavailable)
    }
}

/// Key-value slot the test keeps a handle on after the controller takes
/// ownership of its clone. Doubles as "the browser profile" when two
/// controllers share one slot across a simulated reload.
#[derive(Default, Clone)]
pub struct SharedSlot {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for SharedSlot {
    fn save(&mut self, key: &str, value: &str) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn load(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn clear(&mut self, key: &str) {
        self.slots.borrow_mut().remove(key);
    }
}

/// Everything the form/list/notification surface was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    FormRevealed,
    FormConcealed,
    KindInputsSwapped,
    ListEntryRendered(ListEntry),
    Notified(String),
}

#[derive(Default, Clone)]
pub struct RecordingUi {
    pub events: Rc<RefCell<Vec<UiEvent>>>,
}

impl RecordingUi {
    #[allow(dead_code)]
    pub fn notifications(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                UiEvent::Notified(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    #[allow(dead_code)]
    pub fn list_entries(&self) -> Vec<ListEntry> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                UiEvent::ListEntryRendered(entry) => Some(entry.clone()),
                _ => None,
            })
            .collect()
    }
}

impl UiSurface for RecordingUi {
    fn reveal_form(&mut self) {
        self.events.borrow_mut().push(UiEvent::FormRevealed);
    }

    fn conceal_form(&mut self) {
        self.events.borrow_mut().push(UiEvent::FormConcealed);
    }

    fn swap_kind_inputs(&mut self) {
        self.events.borrow_mut().push(UiEvent::KindInputsSwapped);
    }

    fn render_list_entry(&mut self, entry: &ListEntry) {
        self.events
            .borrow_mut()
            .push(UiEvent::ListEntryRendered(entry.clone()));
    }

    fn notify(&mut self, message: &str) {
        self.events
            .borrow_mut()
            .push(UiEvent::Notified(message.to_string()));
    }
}

pub type TestController = SessionController<RecordingMap, StubLocation, SharedSlot, RecordingUi>;

/// Handles the test keeps into the controller's collaborators.
pub struct Handles {
    pub map: RecordingMap,
    pub slot: SharedSlot,
    pub ui: RecordingUi,
}

/// Build a controller around recording doubles with a fresh slot.
#[allow(dead_code)]
pub fn create_controller(location: StubLocation) -> (TestController, Handles) {
    create_controller_with_slot(location, SharedSlot::default())
}

/// Build a controller around recording doubles sharing `slot`.
pub fn create_controller_with_slot(
    location: StubLocation,
    slot: SharedSlot,
) -> (TestController, Handles) {
    init_test_logging();

    let map = RecordingMap::default();
    let ui = RecordingUi::default();
    let handles = Handles {
        map: map.clone(),
        slot: slot.clone(),
        ui: ui.clone(),
    };

    let controller = SessionController::new(Config::default(), map, location, slot, ui);
    (controller, handles)
}

/// Install a subscriber once so `RUST_LOG=debug` works during test runs.
fn init_test_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
