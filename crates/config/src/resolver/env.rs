//! Environment variable helpers for the process-wide resolver.
//!
//! Responsibilities:
//! - Read environment variables with empty/whitespace filtering.
//! - Seed a property store from an environment variable.
//!
//! Does NOT handle:
//! - Per-key overrides at read time (those come from the `PropertyStore`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Seeding never replaces a value already present in the store.

use crate::store::PropertyStore;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Copy environment variable `var` into `store` under `key` if the store has
/// no value for `key` yet.
///
/// Returns `true` if the store was written.
pub fn seed_from_env(store: &dyn PropertyStore, var: &str, key: &str) -> bool {
    if store.get(key).is_some() {
        return false;
    }
    match env_var_or_none(var) {
        Some(value) => {
            tracing::debug!(var, key, "seeding property from environment");
            store.set(key, &value);
            true
        }
        None => false,
    }
}
