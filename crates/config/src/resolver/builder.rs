//! Builder for [`ConfigResolver`].
//!
//! Responsibilities:
//! - Collect the collaborators and names a resolver reads from.
//! - Fill in process defaults for anything not set explicitly.
//! - Perform the initial reload so a built resolver is immediately queryable.
//!
//! Does NOT handle:
//! - Layer merging (see `engine.rs`).
//!
//! Invariants / Assumptions:
//! - Without `with_resources`, resources are read from `default_resource_dir()`.
//! - Without `with_properties`, overrides come from `SystemProperties`.
//! - `build()` fails if the initial reload fails; no half-built resolver escapes.

use std::sync::Arc;

use super::engine::{ConfigResolver, validate_key};
use super::error::ConfigError;
use super::layers::ResourceNames;
use super::path::default_resource_dir;
use crate::constants::CONFIG_FILE_PROPERTY;
use crate::resource::{DirResources, ResourceProvider};
use crate::store::{PropertyStore, SystemProperties};

/// Configures and constructs a [`ConfigResolver`].
pub struct ConfigResolverBuilder {
    resources: Option<Arc<dyn ResourceProvider>>,
    properties: Option<Arc<dyn PropertyStore>>,
    names: ResourceNames,
    file_key: String,
}

impl Default for ConfigResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolverBuilder {
    pub fn new() -> Self {
        Self {
            resources: None,
            properties: None,
            names: ResourceNames::default(),
            file_key: CONFIG_FILE_PROPERTY.to_string(),
        }
    }

    /// Read bundled layers from `resources`.
    pub fn with_resources(mut self, resources: impl ResourceProvider + 'static) -> Self {
        self.resources = Some(Arc::new(resources));
        self
    }

    /// Read overrides and the config file property from `properties`.
    pub fn with_properties(mut self, properties: impl PropertyStore + 'static) -> Self {
        self.properties = Some(Arc::new(properties));
        self
    }

    /// Override the bundled resource names.
    pub fn with_resource_names(mut self, names: ResourceNames) -> Self {
        self.names = names;
        self
    }

    /// Override the property that names the config file.
    pub fn with_file_property_key(mut self, key: impl Into<String>) -> Self {
        self.file_key = key.into();
        self
    }

    /// Build the resolver and load the production layers.
    pub fn build(self) -> Result<ConfigResolver, ConfigError> {
        validate_key(&self.file_key)?;

        let resources: Arc<dyn ResourceProvider> = match self.resources {
            Some(resources) => resources,
            None => {
                let dir = default_resource_dir()
                    .map_err(|e| ConfigError::ResourceDirUnavailable(e.to_string()))?;
                tracing::debug!(dir = %dir.display(), "reading resources from default directory");
                Arc::new(DirResources::new(dir))
            }
        };
        let properties: Arc<dyn PropertyStore> = match self.properties {
            Some(properties) => properties,
            None => Arc::new(SystemProperties),
        };

        let resolver = ConfigResolver::from_parts(resources, properties, self.names, self.file_key);
        resolver.reload()?;
        Ok(resolver)
    }
}
