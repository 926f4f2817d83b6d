//! Tests for the configuration resolver.
//!
//! Responsibilities:
//! - Test layer precedence, per-key overrides, and default fallbacks.
//! - Test the test profile and its isolation from production layers.
//! - Test reload semantics: idempotence, atomicity, and failure handling.
//! - Test concurrent reads during reloads.
//!
//! Invariants:
//! - Tests use `MemoryProperties` so they never touch process-wide state.
//! - Temporary files and directories are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};

use crate::resource::MemoryResources;
use crate::store::MemoryProperties;

use super::{ConfigResolver, Layer};

pub mod profile_tests;

pub const SOURCE: &str = "source";
pub const NEVER_DEFINED: &str = "propstack.test.never.existing.property";
pub const FILE_KEY: &str = "propstack.config.file";

/// All four bundled resources, each defining `source` differently.
pub fn bundled_resources() -> MemoryResources {
    MemoryResources::new()
        .with(
            "config.default.properties",
            "source = default\ndefault.only = from default\nshared = default\n",
        )
        .with(
            "config.properties",
            "source = custom in main\ncustom.only = from custom\nshared = custom\n",
        )
        .with(
            "config.test.default.properties",
            "source = test default properties\ntest.default.only = yes\n",
        )
        .with(
            "config.test.properties",
            "source = test custom properties\n",
        )
}

pub fn build_resolver(resources: MemoryResources, store: &MemoryProperties) -> ConfigResolver {
    ConfigResolver::builder()
        .with_resources(resources)
        .with_properties(store.clone())
        .build()
        .unwrap()
}

/// Write `contents` to a new properties file inside `dir`.
pub fn write_properties_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

pub fn point_file_key_at(store: &MemoryProperties, path: &Path) {
    use crate::store::PropertyStore;
    store.set(FILE_KEY, &path.display().to_string());
}

#[test]
fn test_fresh_resolver_is_loaded_on_build() {
    let store = MemoryProperties::new();
    let resolver = build_resolver(bundled_resources(), &store);

    assert_eq!(
        resolver.get(SOURCE).unwrap().as_deref(),
        Some("custom in main")
    );
    assert_eq!(
        resolver.snapshot().layers(),
        &[Layer::Default, Layer::Custom]
    );
}
