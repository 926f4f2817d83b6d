//! Well-known names shared by the resolver and its hosts.
//!
//! Changing any of these changes where configuration is looked up, so
//! they are centralized here instead of being repeated at call sites.

// =============================================================================
// Bundled Resources
// =============================================================================

/// Default properties, always read first.
pub const DEFAULT_PROPERTIES_RESOURCE: &str = "config.default.properties";

/// Custom properties bundled alongside the defaults (optional).
pub const CUSTOM_PROPERTIES_RESOURCE: &str = "config.properties";

/// Default properties of the test profile.
pub const TEST_DEFAULT_PROPERTIES_RESOURCE: &str = "config.test.default.properties";

/// Custom properties of the test profile (optional).
pub const TEST_CUSTOM_PROPERTIES_RESOURCE: &str = "config.test.properties";

// =============================================================================
// Process-wide Keys
// =============================================================================

/// Property naming an external properties file layered over the bundled ones.
pub const CONFIG_FILE_PROPERTY: &str = "propstack.config.file";

// =============================================================================
// Environment Variables
// =============================================================================

/// Seeds `CONFIG_FILE_PROPERTY` for the process-wide resolver when unset.
pub const CONFIG_FILE_ENV: &str = "PROPSTACK_CONFIG_FILE";

/// Directory the process-wide resolver reads bundled resources from.
pub const RESOURCE_DIR_ENV: &str = "PROPSTACK_RESOURCE_DIR";

/// Application name used to derive the platform config directory.
pub const APP_NAME: &str = "propstack";
