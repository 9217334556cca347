// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory key-value slot for native hosts and tests.

use std::collections::HashMap;

use crate::storage::KeyValueStore;

/// HashMap-backed [`KeyValueStore`]. Contents live only as long as the
/// value itself, the in-memory analog of a fresh browser profile.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn save(&mut self, key: &str, value: &str) {
        self.slots.insert(key.to_string(), value.to_string());
    }

    fn load(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn clear(&mut self, key: &str) {
        self.slots.remove(key);
    }
}
