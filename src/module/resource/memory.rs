//! In-memory resources
//!
//! A [`MemoryResource`] is a path into a shared, in-memory tree of byte
//! entries. Relative resources share the same tree, so entries added through
//! any handle are visible to all of them.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::sync::Arc;

use super::{apply_relative_path, Resource};

type Entries = Arc<RwLock<HashMap<String, Arc<[u8]>>>>;

/// Resource backed by a shared in-memory tree
#[derive(Debug, Clone)]
pub struct MemoryResource {
    path: String,
    entries: Entries,
}

impl MemoryResource {
    /// Create a resource at `path` in a new, empty tree
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add (or replace) an entry in the shared tree, builder style
    pub fn with_entry(self, path: impl Into<String>, contents: impl AsRef<[u8]>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Add (or replace) an entry in the shared tree
    pub fn insert(&self, path: impl Into<String>, contents: impl AsRef<[u8]>) {
        self.entries
            .write()
            .insert(path.into(), Arc::from(contents.as_ref()));
    }

    /// Remove an entry from the shared tree
    pub fn remove(&self, path: &str) -> bool {
        self.entries.write().remove(path).is_some()
    }

    /// Path of this resource within the tree
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Resource for MemoryResource {
    fn create_relative(&self, relative_path: &str) -> io::Result<Arc<dyn Resource>> {
        Ok(Arc::new(MemoryResource {
            path: apply_relative_path(&self.path, relative_path),
            entries: Arc::clone(&self.entries),
        }))
    }

    fn exists(&self) -> bool {
        self.entries.read().contains_key(&self.path)
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        let contents = self.entries.read().get(&self.path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("No in-memory entry at {}", self.path),
            )
        })?;
        Ok(Box::new(Cursor::new(contents)))
    }

    fn description(&self) -> String {
        format!("memory [{}]", self.path)
    }
}
