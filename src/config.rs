//! Application configuration loaded from environment variables.
//!
//! Every setting has a default matching the tracker's original layout, so
//! hosts can construct a controller with `Config::default()` and never
//! touch the environment.

use std::env;

/// Default zoom level, street scale.
const DEFAULT_MAP_ZOOM: u8 = 13;

/// OSM Humanitarian tile style, the layer the tracker has always shipped with.
const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png";

const DEFAULT_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Session configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Zoom level used when the map view is created or re-centered
    pub map_zoom: u8,
    /// Tile style URL handed to the map collaborator
    pub tile_url: String,
    /// Attribution line for the tile layer
    pub attribution: String,
    /// Key naming the workout collection in the persistence slot
    pub storage_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map_zoom: DEFAULT_MAP_ZOOM,
            tile_url: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            storage_key: crate::storage::keys::WORKOUTS.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional; missing or unparsable values fall back
    /// to the defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();
        Self {
            map_zoom: env::var("TRACKER_MAP_ZOOM")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.map_zoom),
            tile_url: env::var("TRACKER_TILE_URL").unwrap_or(defaults.tile_url),
            attribution: env::var("TRACKER_TILE_ATTRIBUTION").unwrap_or(defaults.attribution),
            storage_key: env::var("TRACKER_STORAGE_KEY").unwrap_or(defaults.storage_key),
        }
    }
}
