// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Numeric validation for workout form input.

use crate::error::{AppError, Result};
use crate::models::form::FormInput;
use crate::models::workout::WorkoutKind;

/// True iff every value is a finite number (rejects NaN and ±infinity).
pub fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// True iff every value is strictly greater than zero.
pub fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|v| *v > 0.0)
}

/// Check the kind-specific required fields before a record is constructed.
///
/// Running requires distance, duration and cadence to be finite and
/// positive. Cycling requires elevation to be finite but not positive,
/// so descents with negative gain are accepted. The asymmetry is kept
/// on purpose.
pub fn check(input: &FormInput) -> Result<()> {
    let valid = match input.kind {
        WorkoutKind::Running => {
            let fields = [input.distance_km, input.duration_min, input.cadence_spm];
            all_finite(&fields) && all_positive(&fields)
        }
        WorkoutKind::Cycling => {
            all_finite(&[input.distance_km, input.duration_min, input.elevation_gain_m])
                && all_positive(&[input.distance_km, input.duration_min])
        }
    };

    if valid {
        Ok(())
    } else {
        Err(AppError::Validation)
    }
}
