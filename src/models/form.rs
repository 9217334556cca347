// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Typed form input handed over by the form surface on submit.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::workout::{KindDetails, WorkoutKind};

/// The numeric fields read from the workout form, plus the selected kind.
///
/// All four numbers are always present because the form keeps both
/// kind-specific inputs around; only the fields relevant to `kind` are
/// examined downstream. Hosts parse the raw strings themselves, so
/// unparsable input arrives as NaN and is rejected by validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FormInput {
    pub kind: WorkoutKind,
    pub distance_km: f64,
    pub duration_min: f64,
    pub cadence_spm: f64,
    pub elevation_gain_m: f64,
}

impl FormInput {
    /// Running submission; the elevation field stays at zero.
    pub fn running(distance_km: f64, duration_min: f64, cadence_spm: f64) -> Self {
        Self {
            kind: WorkoutKind::Running,
            distance_km,
            duration_min,
            cadence_spm,
            elevation_gain_m: 0.0,
        }
    }

    /// Cycling submission; the cadence field stays at zero.
    pub fn cycling(distance_km: f64, duration_min: f64, elevation_gain_m: f64) -> Self {
        Self {
            kind: WorkoutKind::Cycling,
            distance_km,
            duration_min,
            cadence_spm: 0.0,
            elevation_gain_m,
        }
    }

    /// The kind-specific payload selected by `kind`.
    pub fn details(&self) -> KindDetails {
        match self.kind {
            WorkoutKind::Running => KindDetails::Running {
                cadence_spm: self.cadence_spm,
            },
            WorkoutKind::Cycling => KindDetails::Cycling {
                elevation_gain_m: self.elevation_gain_m,
            },
        }
    }
}
