// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Ordered in-memory workout collection with a persistence round trip.
//!
//! Only the authoritative snapshot fields cross the persistence boundary;
//! derived metric and description are recomputed on the way back in.

use crate::error::Result;
use crate::models::workout::{Workout, WorkoutSnapshot};
use crate::storage::KeyValueStore;

/// Insertion-ordered collection of workout records. Owned exclusively by
/// the session controller while in memory.
#[derive(Debug, Default)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. No deduplication; entry order is authoritative.
    pub fn append(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }

    /// Linear scan by id. A miss is a condition, not an error.
    pub fn find_by_id(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    /// Mutable lookup, used for the click counter.
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Workout> {
        self.workouts.iter_mut().find(|w| w.id() == id)
    }

    /// Read-only view of the records in insertion order.
    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.workouts.clear();
    }

    /// Serialize every record's authoritative fields.
    pub fn serialize(&self) -> Result<String> {
        let snapshots: Vec<WorkoutSnapshot> = self.workouts.iter().map(Workout::snapshot).collect();
        Ok(serde_json::to_string(&snapshots)?)
    }

    /// Rebuild a store from its serialized form, re-deriving metric and
    /// description for every record.
    pub fn deserialize(data: &str) -> Result<Self> {
        let snapshots: Vec<WorkoutSnapshot> = serde_json::from_str(data)?;
        Ok(Self {
            workouts: snapshots.into_iter().map(Workout::from_snapshot).collect(),
        })
    }

    /// Serialize into the slot under `key`. An encoding failure is traced
    /// and swallowed; the in-memory records stay intact either way.
    pub fn persist(&self, storage: &mut impl KeyValueStore, key: &str) {
        match self.serialize() {
            Ok(blob) => storage.save(key, &blob),
            Err(err) => {
                tracing::error!(error = %err, key, "Failed to persist workout history");
            }
        }
    }

    /// Load from the slot under `key`. An absent or undecodable slot means
    /// no history: the session starts empty rather than failing.
    pub fn restore(storage: &impl KeyValueStore, key: &str) -> Self {
        let Some(blob) = storage.load(key) else {
            return Self::new();
        };

        match Self::deserialize(&blob) {
            Ok(store) => {
                tracing::info!(count = store.len(), key, "Restored workout history");
                store
            }
            Err(err) => {
                tracing::warn!(error = %err, key, "Discarding undecodable workout history");
                Self::new()
            }
        }
    }
}
