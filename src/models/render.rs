// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! View models for the workout list and marker popups.
//!
//! The host renders these as DOM nodes and popup content; this crate only
//! decides what they say.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::workout::{KindDetails, Workout, WorkoutKind};

/// Kind icon shown in popups and list rows.
pub fn icon(kind: WorkoutKind) -> &'static str {
    match kind {
        WorkoutKind::Running => "🏃‍♂️",
        WorkoutKind::Cycling => "🚴‍♀️",
    }
}

/// Popup content: the kind icon plus the record's description.
pub fn popup_text(workout: &Workout) -> String {
    format!("{} {}", icon(workout.kind()), workout.description())
}

/// One icon/value/unit triple in a list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DetailRow {
    pub icon: String,
    pub value: String,
    pub unit: String,
}

/// A rendered list entry for one workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ListEntry {
    /// Record id, used to resolve list clicks back to the record
    pub id: String,
    /// Lowercase kind, the entry's style hook
    pub kind: String,
    /// Entry heading, the record's description
    pub title: String,
    pub rows: Vec<DetailRow>,
}

impl ListEntry {
    /// Build the four rows the list has always shown: distance, duration,
    /// the derived metric to one decimal, then the kind-specific detail.
    pub fn from_workout(workout: &Workout) -> Self {
        let metric = workout.metric();
        let mut rows = vec![
            DetailRow {
                icon: icon(workout.kind()).to_string(),
                value: workout.distance_km().to_string(),
                unit: "km".to_string(),
            },
            DetailRow {
                icon: "⏱".to_string(),
                value: workout.duration_min().to_string(),
                unit: "min".to_string(),
            },
            DetailRow {
                icon: "⚡️".to_string(),
                value: format!("{:.1}", metric.value()),
                unit: metric.unit().to_string(),
            },
        ];

        rows.push(match workout.details() {
            KindDetails::Running { cadence_spm } => DetailRow {
                icon: "🦶🏼".to_string(),
                value: cadence_spm.to_string(),
                unit: "spm".to_string(),
            },
            KindDetails::Cycling { elevation_gain_m } => DetailRow {
                icon: "⛰".to_string(),
                value: elevation_gain_m.to_string(),
                unit: "m".to_string(),
            },
        });

        Self {
            id: workout.id().to_string(),
            kind: workout.kind().as_str().to_string(),
            title: workout.description().to_string(),
            rows,
        }
    }
}
