//! Resource bytes providers.
//!
//! Responsibilities:
//! - Define the `ResourceProvider` seam the resolver reads bundled layers through.
//! - Provide a directory-backed provider and an in-memory provider.
//!
//! Does NOT handle:
//! - Parsing resource contents (see `properties.rs`).
//! - Deciding which resources are optional (see `resolver/layers.rs`).
//!
//! Invariants:
//! - `Ok(None)` means the resource does not exist; it is never an error.
//! - Any other I/O failure is returned as `Err` and surfaces from `reload()`.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// Reads resource bytes by logical name.
pub trait ResourceProvider: Send + Sync {
    /// Returns the bytes of `name`, or `None` if no such resource exists.
    fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>>;

    /// Human-readable location of `name`, used in logs and errors.
    fn describe(&self, name: &str) -> String {
        name.to_string()
    }
}

/// Resources stored as files under a root directory.
#[derive(Debug, Clone)]
pub struct DirResources {
    root: PathBuf,
}

impl DirResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceProvider for DirResources {
    fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
        match std::fs::read(self.root.join(name)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn describe(&self, name: &str) -> String {
        self.root.join(name).display().to_string()
    }
}

/// Resources held in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource, replacing any previous content under `name`.
    pub fn with(mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.entries.insert(name.into(), content.into());
        self
    }
}

impl ResourceProvider for MemoryResources {
    fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.entries.get(name).cloned())
    }

    fn describe(&self, name: &str) -> String {
        format!("memory:{name}")
    }
}
