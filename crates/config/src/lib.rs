//! Layered configuration resolution for propstack.
//!
//! This crate merges `.properties` layers (bundled defaults, bundled custom
//! properties, and an optional override file) into one resolved view, keeps a
//! separate test profile, and lets process-wide properties override any key
//! without a reload.

pub mod constants;
pub mod properties;
mod resolver;
pub mod resource;
pub mod store;

pub use properties::{Properties, PropertiesError};
pub use resolver::{
    ConfigError, ConfigResolver, ConfigResolverBuilder, Layer, Profile, ResolvedView,
    ResourceNames, env_var_or_none, global, install_global, seed_from_env,
};
pub use resource::{DirResources, MemoryResources, ResourceProvider};
pub use store::{MemoryProperties, PropertyStore, ScopedProperty, SystemProperties};
