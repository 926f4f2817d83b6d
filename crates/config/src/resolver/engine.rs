//! The configuration resolver.
//!
//! Responsibilities:
//! - Build a resolved view from ranked layers and publish it atomically.
//! - Serve reads, checking process-wide overrides ahead of the view.
//!
//! Does NOT handle:
//! - Reading individual layers (see `layers.rs`).
//! - Process-wide instance management (see `global.rs`).
//!
//! Invariants / Assumptions:
//! - Precedence, highest first: property store override > file > custom > default.
//! - A view is built completely before it is published; a failed build leaves
//!   the previously published view in place.
//! - `reload` and `load_test_properties` are serialized with each other; readers
//!   are only excluded for the pointer swap, never during layer I/O.
//! - Overrides are looked up on every read and never cached.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use super::builder::ConfigResolverBuilder;
use super::error::ConfigError;
use super::layers::{Layer, Profile, ResourceNames, read_file_layer, read_resource_layer};
use super::view::ResolvedView;
use crate::properties::Properties;
use crate::resource::ResourceProvider;
use crate::store::PropertyStore;

/// Merges ranked configuration layers into one queryable view.
pub struct ConfigResolver {
    resources: Arc<dyn ResourceProvider>,
    properties: Arc<dyn PropertyStore>,
    names: ResourceNames,
    file_key: String,
    view: RwLock<Arc<ResolvedView>>,
    mutation: Mutex<()>,
}

impl fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("names", &self.names)
            .field("file_key", &self.file_key)
            .field("view", &self.snapshot())
            .finish_non_exhaustive()
    }
}

impl ConfigResolver {
    /// Start configuring a resolver.
    pub fn builder() -> ConfigResolverBuilder {
        ConfigResolverBuilder::new()
    }

    /// Assemble a resolver with an empty view. Callers must reload before use.
    pub(crate) fn from_parts(
        resources: Arc<dyn ResourceProvider>,
        properties: Arc<dyn PropertyStore>,
        names: ResourceNames,
        file_key: String,
    ) -> Self {
        Self {
            resources,
            properties,
            names,
            file_key,
            view: RwLock::new(Arc::new(ResolvedView::empty())),
            mutation: Mutex::new(()),
        }
    }

    /// Rebuild the view from the default, custom, and file layers.
    ///
    /// Missing custom or file layers are skipped. On error the previously
    /// published view stays authoritative.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let _mutation = self.mutation.lock().unwrap_or_else(PoisonError::into_inner);
        let view = self.build_view(Profile::Production, true)?;
        self.publish(view);
        Ok(())
    }

    /// Rebuild the view from the test default and test custom layers.
    ///
    /// The file layer is not consulted; call [`reload`](Self::reload) to get
    /// production layers and the file override back.
    pub fn load_test_properties(&self) -> Result<(), ConfigError> {
        let _mutation = self.mutation.lock().unwrap_or_else(PoisonError::into_inner);
        let view = self.build_view(Profile::Test, false)?;
        self.publish(view);
        Ok(())
    }

    /// Read one layer without touching the published view.
    pub fn read_layer(&self, layer: Layer) -> Result<Option<Properties>, ConfigError> {
        match self.names.resource_for(layer) {
            Some(name) => read_resource_layer(self.resources.as_ref(), layer, name),
            None => read_file_layer(self.properties.as_ref(), &self.file_key),
        }
    }

    fn build_view(&self, profile: Profile, with_file: bool) -> Result<ResolvedView, ConfigError> {
        let mut merged = Properties::new();
        let mut layers = Vec::with_capacity(3);

        let file_layer = with_file.then_some(Layer::File);
        for layer in profile.bundled_layers().into_iter().chain(file_layer) {
            match self.read_layer(layer)? {
                Some(properties) => {
                    merged.overlay(properties);
                    layers.push(layer);
                }
                None if layer.is_optional() => {
                    tracing::debug!(%layer, %profile, "optional layer absent, skipping");
                }
                None => {
                    tracing::warn!(%layer, %profile, "default layer absent, treating as empty");
                }
            }
        }

        Ok(ResolvedView::new(profile, layers, merged))
    }

    fn publish(&self, view: ResolvedView) {
        tracing::info!(
            profile = %view.profile(),
            entries = view.len(),
            layers = ?view.layers(),
            "published configuration"
        );
        let view = Arc::new(view);
        *self.view.write().unwrap_or_else(PoisonError::into_inner) = view;
    }

    /// Look up `key`: a process-wide override first, then the view.
    ///
    /// Returns `Ok(None)` if neither has a value.
    pub fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        validate_key(key)?;

        if let Some(value) = self.properties.get(key) {
            return Ok(Some(value));
        }

        let view = self.view.read().unwrap_or_else(PoisonError::into_inner);
        Ok(view.get(key).map(str::to_string))
    }

    /// Like [`get`](Self::get), returning `default` when `key` has no value.
    pub fn get_or(&self, key: &str, default: impl Into<String>) -> Result<String, ConfigError> {
        Ok(self.get(key)?.unwrap_or_else(|| default.into()))
    }

    /// Look up `key` and parse it.
    ///
    /// A present value that fails to parse is `ConfigError::InvalidValue`.
    pub fn get_parsed<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let Some(raw) = self.get(key)? else {
            return Ok(None);
        };
        raw.trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("{e} (got {raw:?})"),
            })
    }

    /// The currently published view. Overrides are not included.
    pub fn snapshot(&self) -> Arc<ResolvedView> {
        Arc::clone(&self.view.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Profile of the currently published view.
    pub fn profile(&self) -> Profile {
        self.snapshot().profile()
    }

    /// Property naming the override file.
    pub fn file_property_key(&self) -> &str {
        &self.file_key
    }
}

pub(crate) fn validate_key(key: &str) -> Result<(), ConfigError> {
    if key.trim().is_empty() {
        return Err(ConfigError::InvalidKey(key.to_string()));
    }
    Ok(())
}
