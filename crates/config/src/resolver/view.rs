//! The published, immutable result of a reload.

use serde::Serialize;

use super::layers::{Layer, Profile};
use crate::properties::Properties;

/// A merged set of layers, as served to readers.
///
/// Views are never mutated after publication; a reload replaces the whole
/// view. Process-wide overrides are not part of a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedView {
    profile: Profile,
    layers: Vec<Layer>,
    properties: Properties,
}

impl ResolvedView {
    pub(crate) fn new(profile: Profile, layers: Vec<Layer>, properties: Properties) -> Self {
        Self {
            profile,
            layers,
            properties,
        }
    }

    /// A view with no layers, in place until the first reload completes.
    pub(crate) fn empty() -> Self {
        Self::new(Profile::Production, Vec::new(), Properties::new())
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Layers that contributed to this view, lowest precedence first.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Pretty-printed JSON of the view, for diagnostics.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
