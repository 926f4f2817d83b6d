//! Source layers and profiles.
//!
//! Responsibilities:
//! - Name the layers a resolved view is built from and the profiles that select them.
//! - Read a single layer from its resource or from the override file.
//!
//! Does NOT handle:
//! - Merging layers or publishing the result (see `engine.rs`).
//!
//! Invariants:
//! - A layer whose source is absent yields `Ok(None)`, never an error.
//! - A layer whose source exists but cannot be read or parsed is an error.
//! - The override file path is read from the property store on every call.

use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::Serialize;

use super::error::ConfigError;
use crate::constants::{
    CUSTOM_PROPERTIES_RESOURCE, DEFAULT_PROPERTIES_RESOURCE, TEST_CUSTOM_PROPERTIES_RESOURCE,
    TEST_DEFAULT_PROPERTIES_RESOURCE,
};
use crate::properties::Properties;
use crate::resource::ResourceProvider;
use crate::store::PropertyStore;

/// Which pair of bundled layers a view is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    Production,
    Test,
}

impl Profile {
    /// Bundled layers of this profile, lowest precedence first.
    pub fn bundled_layers(self) -> [Layer; 2] {
        match self {
            Profile::Production => [Layer::Default, Layer::Custom],
            Profile::Test => [Layer::TestDefault, Layer::TestCustom],
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Production => f.write_str("production"),
            Profile::Test => f.write_str("test"),
        }
    }
}

/// A single ranked source of key/value pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Bundled defaults.
    Default,
    /// Bundled custom properties.
    Custom,
    /// The file named by the config file property.
    File,
    TestDefault,
    TestCustom,
}

impl Layer {
    /// Default layers are expected to exist; every other layer may be absent.
    pub fn is_optional(self) -> bool {
        !matches!(self, Layer::Default | Layer::TestDefault)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Layer::Default => "default",
            Layer::Custom => "custom",
            Layer::File => "file",
            Layer::TestDefault => "test-default",
            Layer::TestCustom => "test-custom",
        };
        f.write_str(name)
    }
}

/// Resource names of the bundled layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNames {
    pub default: String,
    pub custom: String,
    pub test_default: String,
    pub test_custom: String,
}

impl Default for ResourceNames {
    fn default() -> Self {
        Self {
            default: DEFAULT_PROPERTIES_RESOURCE.to_string(),
            custom: CUSTOM_PROPERTIES_RESOURCE.to_string(),
            test_default: TEST_DEFAULT_PROPERTIES_RESOURCE.to_string(),
            test_custom: TEST_CUSTOM_PROPERTIES_RESOURCE.to_string(),
        }
    }
}

impl ResourceNames {
    /// The resource backing `layer`, or `None` for the file layer.
    pub fn resource_for(&self, layer: Layer) -> Option<&str> {
        match layer {
            Layer::Default => Some(self.default.as_str()),
            Layer::Custom => Some(self.custom.as_str()),
            Layer::TestDefault => Some(self.test_default.as_str()),
            Layer::TestCustom => Some(self.test_custom.as_str()),
            Layer::File => None,
        }
    }
}

/// Read a bundled layer through the resource provider.
pub(crate) fn read_resource_layer(
    resources: &dyn ResourceProvider,
    layer: Layer,
    name: &str,
) -> Result<Option<Properties>, ConfigError> {
    let origin = resources.describe(name);
    let bytes = resources
        .read(name)
        .map_err(|source| ConfigError::ResourceRead {
            resource: origin.clone(),
            source,
        })?;

    let Some(bytes) = bytes else {
        return Ok(None);
    };

    let properties = Properties::parse(&bytes).map_err(|source| ConfigError::Parse {
        origin: origin.clone(),
        source,
    })?;
    tracing::debug!(%layer, origin = %origin, entries = properties.len(), "read layer");
    Ok(Some(properties))
}

/// Read the file named by `file_key` in the property store.
///
/// An unset or blank key, or a path that does not exist, yields `Ok(None)`.
pub(crate) fn read_file_layer(
    store: &dyn PropertyStore,
    file_key: &str,
) -> Result<Option<Properties>, ConfigError> {
    let Some(raw) = store.get(file_key) else {
        tracing::debug!(key = file_key, "config file property not set");
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        tracing::debug!(key = file_key, "config file property is blank");
        return Ok(None);
    }

    let path = PathBuf::from(trimmed);
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(
                key = file_key,
                path = %path.display(),
                "config file property names a file that does not exist, skipping"
            );
            return Ok(None);
        }
        Err(source) => return Err(ConfigError::FileRead { path, source }),
    };

    let properties = Properties::parse(&bytes).map_err(|source| ConfigError::Parse {
        origin: path.display().to_string(),
        source,
    })?;
    tracing::debug!(
        layer = %Layer::File,
        path = %path.display(),
        entries = properties.len(),
        "read layer"
    );
    Ok(Some(properties))
}
