// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pure metric derivations: pace, speed, and the display description.

use chrono::{DateTime, Datelike, Utc};

use crate::models::workout::{DerivedMetric, KindDetails, WorkoutKind};

/// English month names, indexed by `month0` (0-11).
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Running pace in minutes per kilometer.
///
/// No guard against zero distance; the division passes through and yields
/// infinity, which validation upstream prevents for stored records.
pub fn pace_min_per_km(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

/// Cycling speed in kilometers per hour. Zero duration passes through the
/// same way as zero distance in [`pace_min_per_km`].
pub fn speed_km_per_h(distance_km: f64, duration_min: f64) -> f64 {
    distance_km / (duration_min / 60.0)
}

/// Derive the kind-appropriate metric for a record.
pub fn derive(details: KindDetails, distance_km: f64, duration_min: f64) -> DerivedMetric {
    match details {
        KindDetails::Running { .. } => DerivedMetric::Pace {
            min_per_km: pace_min_per_km(distance_km, duration_min),
        },
        KindDetails::Cycling { .. } => DerivedMetric::Speed {
            km_per_h: speed_km_per_h(distance_km, duration_min),
        },
    }
}

/// Display description: `"{Kind} on {MonthName} {DayOfMonth}"`.
pub fn describe(kind: WorkoutKind, created_at: DateTime<Utc>) -> String {
    format!(
        "{} on {} {}",
        kind.label(),
        MONTHS[created_at.month0() as usize],
        created_at.day()
    )
}
