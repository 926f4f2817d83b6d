//! The process-wide resolver.
//!
//! Responsibilities:
//! - Lazily construct one `ConfigResolver` per process on first access.
//! - Let a composition root install an explicitly built resolver instead.
//!
//! Does NOT handle:
//! - Resolution itself (see `engine.rs`).
//!
//! Invariants:
//! - Construction is serialized; at most one resolver is ever installed.
//! - A failed initial reload installs nothing, so a later call can retry.
//! - `PROPSTACK_CONFIG_FILE` seeds the config file property only if it is unset.

use std::sync::{Mutex, OnceLock, PoisonError};

use super::engine::ConfigResolver;
use super::env::seed_from_env;
use super::error::ConfigError;
use crate::constants::{CONFIG_FILE_ENV, CONFIG_FILE_PROPERTY};
use crate::store::SystemProperties;

static GLOBAL: OnceLock<ConfigResolver> = OnceLock::new();
static INIT: Mutex<()> = Mutex::new(());

/// Returns the process-wide resolver, constructing it on first use.
///
/// The default resolver reads resources from `default_resource_dir()` and
/// overrides from [`SystemProperties`].
pub fn global() -> Result<&'static ConfigResolver, ConfigError> {
    if let Some(resolver) = GLOBAL.get() {
        return Ok(resolver);
    }

    let _init = INIT.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(resolver) = GLOBAL.get() {
        return Ok(resolver);
    }

    seed_from_env(&SystemProperties, CONFIG_FILE_ENV, CONFIG_FILE_PROPERTY);
    let resolver = ConfigResolver::builder().build()?;
    tracing::debug!("initialized process-wide config resolver");
    Ok(GLOBAL.get_or_init(move || resolver))
}

/// Install `resolver` as the process-wide resolver.
///
/// Returns `resolver` back if one has already been installed or constructed.
pub fn install_global(resolver: ConfigResolver) -> Result<&'static ConfigResolver, ConfigResolver> {
    let _init = INIT.lock().unwrap_or_else(PoisonError::into_inner);
    if GLOBAL.get().is_some() {
        return Err(resolver);
    }
    Ok(GLOBAL.get_or_init(move || resolver))
}
