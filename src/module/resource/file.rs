//! Filesystem-backed resources

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::Resource;

/// Resource backed by a filesystem path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResource {
    path: PathBuf,
}

impl FileResource {
    /// Create a resource for `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Filesystem path of this resource
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Resource for FileResource {
    fn create_relative(&self, relative_path: &str) -> io::Result<Arc<dyn Resource>> {
        // Directories act as their own base; files resolve next to themselves
        let base = if self.path.is_dir() {
            self.path.clone()
        } else {
            self.path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default()
        };
        let relative = relative_path.trim_start_matches('/');
        Ok(Arc::new(FileResource::new(base.join(relative))))
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        let file = File::open(&self.path)?;
        Ok(Box::new(file))
    }

    fn description(&self) -> String {
        format!("file [{}]", self.path.display())
    }
}
