//! Test profile tests.
//!
//! Responsibilities:
//! - Test that the test profile replaces production default/custom layers.
//! - Test that loading the test profile ignores the override file.
//! - Test switching back to production with `reload()`.

use tempfile::TempDir;

use super::{
    SOURCE, build_resolver, bundled_resources, point_file_key_at, write_properties_file,
};
use crate::resolver::{Layer, Profile};
use crate::resource::MemoryResources;
use crate::store::{MemoryProperties, PropertyStore};

#[test]
fn test_test_profile_uses_test_custom_layer() {
    let resolver = build_resolver(bundled_resources(), &MemoryProperties::new());
    resolver.load_test_properties().unwrap();

    assert_eq!(
        resolver.get(SOURCE).unwrap().as_deref(),
        Some("test custom properties")
    );
    assert_eq!(resolver.profile(), Profile::Test);
    assert_eq!(
        resolver.snapshot().layers(),
        &[Layer::TestDefault, Layer::TestCustom]
    );
}

#[test]
fn test_test_profile_without_custom_falls_back_to_test_default() {
    let resources = MemoryResources::new()
        .with("config.default.properties", "source = default\n")
        .with(
            "config.test.default.properties",
            "source = test default properties\n",
        );
    let resolver = build_resolver(resources, &MemoryProperties::new());
    resolver.load_test_properties().unwrap();

    assert_eq!(
        resolver.get(SOURCE).unwrap().as_deref(),
        Some("test default properties")
    );
}

#[test]
fn test_test_profile_is_isolated_from_production_layers() {
    let resolver = build_resolver(bundled_resources(), &MemoryProperties::new());
    resolver.load_test_properties().unwrap();

    assert_eq!(resolver.get("default.only").unwrap(), None);
    assert_eq!(resolver.get("custom.only").unwrap(), None);
    assert_eq!(resolver.get("shared").unwrap(), None);
    assert_eq!(
        resolver.get("test.default.only").unwrap().as_deref(),
        Some("yes")
    );
}

#[test]
fn test_test_profile_ignores_override_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_properties_file(temp_dir.path(), "f.properties", "source = from file\n");
    let store = MemoryProperties::new();
    point_file_key_at(&store, &path);
    let resolver = build_resolver(bundled_resources(), &store);
    assert_eq!(resolver.get(SOURCE).unwrap().as_deref(), Some("from file"));

    resolver.load_test_properties().unwrap();
    assert_eq!(
        resolver.get(SOURCE).unwrap().as_deref(),
        Some("test custom properties")
    );
    assert!(!resolver.snapshot().layers().contains(&Layer::File));
}

#[test]
fn test_overrides_still_apply_in_test_profile() {
    let store = MemoryProperties::new();
    let resolver = build_resolver(bundled_resources(), &store);
    resolver.load_test_properties().unwrap();

    store.set(SOURCE, "direct");
    assert_eq!(resolver.get(SOURCE).unwrap().as_deref(), Some("direct"));
}

#[test]
fn test_reload_after_test_profile_restores_production_and_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_properties_file(temp_dir.path(), "f.properties", "source = from file\n");
    let store = MemoryProperties::new();
    let resolver = build_resolver(bundled_resources(), &store);

    resolver.load_test_properties().unwrap();
    point_file_key_at(&store, &path);
    resolver.reload().unwrap();

    assert_eq!(resolver.profile(), Profile::Production);
    assert_eq!(resolver.get(SOURCE).unwrap().as_deref(), Some("from file"));
    assert_eq!(
        resolver.get("custom.only").unwrap().as_deref(),
        Some("from custom")
    );
    assert_eq!(resolver.get("test.default.only").unwrap(), None);
}
