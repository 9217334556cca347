// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistence layer: the external key-value slot and the workout store.

pub mod memory;
pub mod store;

pub use memory::MemoryStore;
pub use store::WorkoutStore;

/// Storage keys as constants.
pub mod keys {
    /// The single slot holding the serialized workout collection.
    pub const WORKOUTS: &str = "workouts";
}

/// External key-value persistence slot.
///
/// Shaped after browser local storage: string keys, opaque string values,
/// no error channel. `load` answers `None` for an absent key.
/// Implementations live with the host.
pub trait KeyValueStore {
    fn save(&mut self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn clear(&mut self, key: &str);
}
