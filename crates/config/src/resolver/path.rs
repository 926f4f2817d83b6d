//! Location of bundled resources for the process-wide resolver.
//!
//! Responsibilities:
//! - Determine the directory bundled `.properties` resources are read from.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - Reading resources (see `resource.rs`).

use std::path::PathBuf;

use anyhow::Context;

use super::env::env_var_or_none;
use crate::constants::{APP_NAME, RESOURCE_DIR_ENV};

/// Returns the directory bundled resources are read from.
///
/// `PROPSTACK_RESOURCE_DIR` wins when set; otherwise:
/// - Linux/macOS: `~/.config/propstack`
/// - Windows: `%AppData%\propstack`
pub(crate) fn default_resource_dir() -> Result<PathBuf, anyhow::Error> {
    if let Some(dir) = env_var_or_none(RESOURCE_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_default_resource_dir_matches_expected_project_dirs() {
        temp_env::with_var_unset(RESOURCE_DIR_ENV, || {
            let expected = directories::ProjectDirs::from("", "", APP_NAME)
                .unwrap()
                .config_dir()
                .to_path_buf();

            assert_eq!(default_resource_dir().unwrap(), expected);
        });
    }

    #[test]
    #[serial]
    fn test_resource_dir_env_var_takes_precedence() {
        temp_env::with_var(RESOURCE_DIR_ENV, Some(" /opt/app/resources "), || {
            assert_eq!(
                default_resource_dir().unwrap(),
                PathBuf::from("/opt/app/resources")
            );
        });
    }
}
