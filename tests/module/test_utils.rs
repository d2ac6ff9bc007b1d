//! Test utilities for module system testing
//!
//! Provides instrumented resources and type resolvers plus helpers for
//! building descriptors over in-memory and on-disk module trees.

use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

use module_options::module::{
    Location, MemoryResource, ModuleDescriptor, ModuleType, Resource, TypeHandle,
    TypeRegistry, TypeResolutionFailure, TypeResolver,
};

/// Resource that counts companion probes and fails the test past a limit
#[derive(Debug)]
pub struct ProbeLimitedResource {
    inner: MemoryResource,
    probes: Arc<AtomicUsize>,
    max_probes: usize,
}

impl ProbeLimitedResource {
    pub fn new(inner: MemoryResource, max_probes: usize) -> Self {
        Self {
            inner,
            probes: Arc::new(AtomicUsize::new(0)),
            max_probes,
        }
    }

    /// Shared probe counter, readable after the resource moved into a descriptor
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.probes)
    }
}

impl Resource for ProbeLimitedResource {
    fn create_relative(&self, relative_path: &str) -> io::Result<Arc<dyn Resource>> {
        let probes = self.probes.fetch_add(1, Ordering::SeqCst) + 1;
        assert!(
            probes <= self.max_probes,
            "companion resource probed {} times (limit {})",
            probes,
            self.max_probes
        );
        self.inner.create_relative(relative_path)
    }

    fn exists(&self) -> bool {
        self.inner.exists()
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        self.inner.open()
    }

    fn description(&self) -> String {
        self.inner.description()
    }
}

/// Resource whose companions exist but fail on read
#[derive(Debug)]
pub struct UnreadableResource;

impl Resource for UnreadableResource {
    fn create_relative(&self, _relative_path: &str) -> io::Result<Arc<dyn Resource>> {
        Ok(Arc::new(UnreadableResource))
    }

    fn exists(&self) -> bool {
        true
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "access denied"))
    }

    fn description(&self) -> String {
        "unreadable".to_string()
    }
}

/// Resource whose relative lookup itself fails
#[derive(Debug)]
pub struct BrokenResource;

impl Resource for BrokenResource {
    fn create_relative(&self, _relative_path: &str) -> io::Result<Arc<dyn Resource>> {
        Err(io::Error::new(io::ErrorKind::Other, "storage offline"))
    }

    fn exists(&self) -> bool {
        true
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Err(io::Error::new(io::ErrorKind::Other, "storage offline"))
    }

    fn description(&self) -> String {
        "broken".to_string()
    }
}

/// Type resolver that counts resolutions before delegating
#[derive(Debug)]
pub struct CountingResolver {
    inner: TypeRegistry,
    pub calls: AtomicUsize,
}

impl CountingResolver {
    pub fn new(inner: TypeRegistry) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TypeResolver for CountingResolver {
    fn resolve(&self, name: &str, classpath: &[Location]) -> Result<TypeHandle, TypeResolutionFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.resolve(name, classpath)
    }
}

/// In-memory module tree with a module resource at `modules/<type>/<name>.xml`
pub fn memory_module(module_type: ModuleType, name: &str, companion: Option<&str>) -> MemoryResource {
    let module_path = format!("modules/{}/{}.xml", module_type, name);
    let resource = MemoryResource::new(module_path.clone()).with_entry(module_path, "<beans/>");
    if let Some(contents) = companion {
        resource.insert(format!("modules/{}/{}.properties", module_type, name), contents);
    }
    resource
}

/// Descriptor over an in-memory module with the given companion contents
pub fn descriptor_with_companion(name: &str, companion: Option<&str>) -> ModuleDescriptor {
    ModuleDescriptor::new(
        name,
        ModuleType::Source,
        Arc::new(memory_module(ModuleType::Source, name, companion)),
    )
    .unwrap()
}

/// On-disk module tree for filesystem-backed tests
pub struct ModuleTestFixture {
    /// Temporary directory for test data
    pub temp_dir: TempDir,
    /// Modules directory path
    pub modules_dir: PathBuf,
}

impl ModuleTestFixture {
    /// Create a new fixture with an isolated modules directory
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let modules_dir = temp_dir.path().join("modules");
        std::fs::create_dir_all(&modules_dir)?;
        Ok(Self {
            temp_dir,
            modules_dir,
        })
    }

    /// Write a module definition and, optionally, its companion properties
    pub fn create_module(
        &self,
        module_type: ModuleType,
        name: &str,
        companion: Option<&[u8]>,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let dir = self.modules_dir.join(module_type.as_str());
        std::fs::create_dir_all(&dir)?;
        let module_path = dir.join(format!("{}.xml", name));
        std::fs::write(&module_path, "<beans/>")?;
        if let Some(contents) = companion {
            std::fs::write(dir.join(format!("{}.properties", name)), contents)?;
        }
        Ok(module_path)
    }
}
