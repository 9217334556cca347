// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout records: the tagged running/cycling data model, its derived
//! metric, and the snapshot shape that crosses the persistence boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::services::metrics;

/// Geographic point captured from a map click.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Coordinates {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Discriminant for the two workout kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Lowercase form used in serialized data and style class names.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    /// Capitalized form used in the display description.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }
}

impl std::fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific payload carried by a workout record.
///
/// Serialized internally tagged, so a flattened snapshot keeps the flat
/// `"kind": "running"` shape the original data had.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum KindDetails {
    /// Running carries step cadence in steps per minute.
    Running { cadence_spm: f64 },
    /// Cycling carries elevation gain in meters. Sign is unrestricted:
    /// descents come out negative and are accepted.
    Cycling { elevation_gain_m: f64 },
}

impl KindDetails {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            KindDetails::Running { .. } => WorkoutKind::Running,
            KindDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// Metric derived once from distance and duration at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DerivedMetric {
    /// Running pace in minutes per kilometer
    Pace { min_per_km: f64 },
    /// Cycling speed in kilometers per hour
    Speed { km_per_h: f64 },
}

impl DerivedMetric {
    pub fn value(&self) -> f64 {
        match self {
            DerivedMetric::Pace { min_per_km } => *min_per_km,
            DerivedMetric::Speed { km_per_h } => *km_per_h,
        }
    }

    /// Display unit for the metric value.
    pub fn unit(&self) -> &'static str {
        match self {
            DerivedMetric::Pace { .. } => "min/km",
            DerivedMetric::Speed { .. } => "km/h",
        }
    }
}

/// One logged workout.
///
/// Immutable after construction except for the click counter; the metric
/// and description are derived exactly once, in [`Workout::new`] or on
/// the way back in from a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: String,
    created_at: DateTime<Utc>,
    coords: Coordinates,
    distance_km: f64,
    duration_min: f64,
    details: KindDetails,
    metric: DerivedMetric,
    description: String,
    clicks: u32,
}

impl Workout {
    /// Build a record, deriving its metric and description.
    ///
    /// The id comes from `created_at`, so callers pass the current time
    /// (the controller uses `Utc::now()`).
    pub fn new(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        details: KindDetails,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: make_id(created_at),
            created_at,
            coords,
            distance_km,
            duration_min,
            details,
            metric: metrics::derive(details, distance_km, duration_min),
            description: metrics::describe(details.kind(), created_at),
            clicks: 0,
        }
    }

    /// Rebuild a record from its persisted snapshot, recomputing the
    /// derived metric and description. The click counter starts over.
    pub fn from_snapshot(snapshot: WorkoutSnapshot) -> Self {
        Self {
            metric: metrics::derive(snapshot.details, snapshot.distance_km, snapshot.duration_min),
            description: metrics::describe(snapshot.details.kind(), snapshot.created_at),
            id: snapshot.id,
            created_at: snapshot.created_at,
            coords: snapshot.coords,
            distance_km: snapshot.distance_km,
            duration_min: snapshot.duration_min,
            details: snapshot.details,
            clicks: 0,
        }
    }

    /// Snapshot of the authoritative fields for persistence.
    pub fn snapshot(&self) -> WorkoutSnapshot {
        WorkoutSnapshot {
            id: self.id.clone(),
            created_at: self.created_at,
            coords: self.coords,
            distance_km: self.distance_km,
            duration_min: self.duration_min,
            details: self.details,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> Coordinates {
        self.coords
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn kind(&self) -> WorkoutKind {
        self.details.kind()
    }

    pub fn details(&self) -> KindDetails {
        self.details
    }

    pub fn metric(&self) -> DerivedMetric {
        self.metric
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// How many times this record has been selected from the list.
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    /// Count one list selection.
    pub fn register_click(&mut self) {
        self.clicks += 1;
    }
}

/// Last ten digits of the creation time in milliseconds.
///
/// Carried over from the original id scheme; two records created in the
/// same millisecond collide, an accepted weakness.
fn make_id(created_at: DateTime<Utc>) -> String {
    let millis = created_at.timestamp_millis().to_string();
    let cut = millis.len().saturating_sub(10);
    millis[cut..].to_string()
}

/// Persisted form of a workout: the minimal authoritative fields.
///
/// Derived metric, description and click counter are deliberately absent;
/// they are recomputed from what is here (see [`Workout::from_snapshot`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSnapshot {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub coords: Coordinates,
    pub distance_km: f64,
    pub duration_min: f64,
    #[serde(flatten)]
    pub details: KindDetails,
}
