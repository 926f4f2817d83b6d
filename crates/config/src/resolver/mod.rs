//! Layered configuration resolution.
//!
//! Responsibilities:
//! - Merge bundled default/custom layers and an optional override file into one view.
//! - Keep a separate test profile that swaps in test default/custom layers.
//! - Serve reads with per-key process-wide overrides ahead of the view.
//! - Own the process-wide resolver instance.
//!
//! Does NOT handle:
//! - Mapping resource names to bytes (see `resource.rs`).
//! - Storage of process-wide strings (see `store.rs`).
//!
//! Invariants / Assumptions:
//! - Property store overrides take precedence over every layer and need no reload.
//! - The file layer takes precedence over the custom layer, which takes
//!   precedence over the default layer.
//! - Loading the test profile does not consult the file layer.

mod builder;
mod engine;
mod env;
mod error;
mod global;
mod layers;
mod path;
mod view;

pub use builder::ConfigResolverBuilder;
pub use engine::ConfigResolver;
pub use env::{env_var_or_none, seed_from_env};
pub use error::ConfigError;
pub use global::{global, install_global};
pub use layers::{Layer, Profile, ResourceNames};
pub use view::ResolvedView;

#[cfg(test)]
mod tests;
