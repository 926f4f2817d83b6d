//! Process-wide string stores used for per-key overrides.
//!
//! Responsibilities:
//! - Define the `PropertyStore` seam (get/set/clear of named strings).
//! - Provide `SystemProperties`, the process-wide registry, and
//!   `MemoryProperties`, an instance-scoped store for tests and embedding.
//! - Provide `ScopedProperty`, which restores a key when dropped.
//!
//! Does NOT handle:
//! - Precedence against resolved layers (see `resolver/engine.rs`).
//! - Reading environment variables (see `resolver/env.rs`).
//!
//! Invariants:
//! - Stores are in-memory; no operation performs I/O.
//! - Lock poisoning is recovered: every write leaves the map consistent.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

/// A globally visible set of named string values.
pub trait PropertyStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    /// Remove `key`, returning the value it held.
    fn clear(&self, key: &str) -> Option<String>;
}

static SYSTEM_PROPERTIES: LazyLock<RwLock<HashMap<String, String>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Handle to the process-wide property registry.
///
/// Every `SystemProperties` value reads and writes the same registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProperties;

impl PropertyStore for SystemProperties {
    fn get(&self, key: &str) -> Option<String> {
        SYSTEM_PROPERTIES
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        SYSTEM_PROPERTIES
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn clear(&self, key: &str) -> Option<String> {
        SYSTEM_PROPERTIES
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
    }
}

/// An isolated property store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryProperties {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryProperties {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PropertyStore for MemoryProperties {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn clear(&self, key: &str) -> Option<String> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
    }
}

/// Sets a key for the lifetime of the guard.
///
/// On drop the key is restored to the value it held before, or cleared if it
/// was unset.
#[must_use = "the override is reverted as soon as the guard is dropped"]
pub struct ScopedProperty<'a> {
    store: &'a dyn PropertyStore,
    key: String,
    previous: Option<String>,
}

impl<'a> ScopedProperty<'a> {
    pub fn new(store: &'a dyn PropertyStore, key: &str, value: &str) -> Self {
        let previous = store.get(key);
        store.set(key, value);
        Self {
            store,
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for ScopedProperty<'_> {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(value) => self.store.set(&self.key, &value),
            None => {
                self.store.clear(&self.key);
            }
        }
    }
}
