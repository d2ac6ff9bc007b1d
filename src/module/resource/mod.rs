//! Resource access for modules
//!
//! A module's backing location is reached through the [`Resource`] trait so
//! that modules can live on the filesystem, in memory, or anywhere a host
//! chooses. Companion resources are found relative to the module's resource.

pub mod file;
pub mod memory;

pub use file::FileResource;
pub use memory::MemoryResource;

use std::fmt;
use std::io::{self, Read};
use std::sync::Arc;

/// Handle to a readable location
///
/// "Not found" is reported by [`Resource::exists`] returning `false`, never as
/// an error from `create_relative`.
pub trait Resource: Send + Sync + fmt::Debug {
    /// Create a resource for `relative_path`, resolved against this resource's
    /// parent location
    fn create_relative(&self, relative_path: &str) -> io::Result<Arc<dyn Resource>>;

    /// Whether the resource physically exists
    fn exists(&self) -> bool;

    /// Open the resource for reading
    fn open(&self) -> io::Result<Box<dyn Read + Send>>;

    /// Human-readable description, for diagnostics only
    fn description(&self) -> String;

    /// Read the whole resource into memory
    fn read_bytes(&self) -> io::Result<Vec<u8>> {
        let mut reader = self.open()?;
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

/// Resource that only carries a description
///
/// Stands in for modules that have no backing location. It never exists and
/// cannot be read or used as a base for relative resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptiveResource {
    description: String,
}

impl DescriptiveResource {
    /// Create a placeholder resource
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl Resource for DescriptiveResource {
    fn create_relative(&self, relative_path: &str) -> io::Result<Arc<dyn Resource>> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!(
                "Cannot create relative resource '{}' for {}",
                relative_path, self.description
            ),
        ))
    }

    fn exists(&self) -> bool {
        false
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} cannot be opened because it does not point to a readable resource", self.description),
        ))
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

/// Replace the last segment of a `/`-separated path with `relative_path`
///
/// A path ending in `/` is treated as a directory and `relative_path` is
/// appended to it.
pub(crate) fn apply_relative_path(path: &str, relative_path: &str) -> String {
    match path.rfind('/') {
        Some(pos) => {
            let relative = relative_path.strip_prefix('/').unwrap_or(relative_path);
            format!("{}/{}", &path[..pos], relative)
        }
        None => relative_path.to_string(),
    }
}
