//! Module descriptors
//!
//! A [`ModuleDescriptor`] identifies a module (name, type, backing resource,
//! optional classpath), carries mutable auxiliary state, and lazily resolves
//! the module's options metadata exactly once.

use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::module::loader::{Location, TypeResolver};
use crate::module::manifest::Properties;
use crate::module::options::{OptionsMetadata, OptionsMetadataResolver};
use crate::module::registry::TypeRegistry;
use crate::module::resource::{DescriptiveResource, Resource};
use crate::module::traits::{ModuleError, ModuleType};
use crate::utils::{ensure_not_blank, ensure_some};

/// Description used for modules created without a backing resource
pub const PLACEHOLDER_RESOURCE_DESCRIPTION: &str = "Dummy resource";

/// Outer `None`: not resolved yet. Inner `None`: resolved, no metadata.
type MetadataCell = Mutex<Option<Option<Arc<OptionsMetadata>>>>;

/// Definition of a module
#[derive(Debug)]
pub struct ModuleDescriptor {
    name: String,
    module_type: ModuleType,
    resource: Arc<dyn Resource>,
    classpath: Option<Vec<Location>>,
    properties: RwLock<Option<Properties>>,
    definition: RwLock<Option<String>>,
    type_resolver: Arc<dyn TypeResolver>,
    options_metadata: MetadataCell,
}

impl ModuleDescriptor {
    /// Start building a descriptor
    pub fn builder() -> ModuleDescriptorBuilder {
        ModuleDescriptorBuilder::default()
    }

    /// Create a descriptor with no classpath
    pub fn new(
        name: impl Into<String>,
        module_type: ModuleType,
        resource: Arc<dyn Resource>,
    ) -> Result<Self, ModuleError> {
        Self::builder()
            .name(name)
            .module_type(module_type)
            .resource(resource)
            .build()
    }

    /// Create a descriptor with a classpath; an empty classpath means none
    pub fn with_classpath(
        name: impl Into<String>,
        module_type: ModuleType,
        resource: Arc<dyn Resource>,
        classpath: Vec<Location>,
    ) -> Result<Self, ModuleError> {
        Self::builder()
            .name(name)
            .module_type(module_type)
            .resource(resource)
            .classpath(classpath)
            .build()
    }

    /// Create a descriptor backed by a placeholder resource that never exists
    pub fn with_placeholder_resource(
        name: impl Into<String>,
        module_type: ModuleType,
    ) -> Result<Self, ModuleError> {
        Self::new(
            name,
            module_type,
            Arc::new(DescriptiveResource::new(PLACEHOLDER_RESOURCE_DESCRIPTION)),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module_type(&self) -> ModuleType {
        self.module_type
    }

    pub fn resource(&self) -> &Arc<dyn Resource> {
        &self.resource
    }

    /// Classpath locations, or `None` when the module has no classpath
    pub fn classpath(&self) -> Option<&[Location]> {
        self.classpath.as_deref()
    }

    pub fn type_resolver(&self) -> &dyn TypeResolver {
        self.type_resolver.as_ref()
    }

    pub fn properties(&self) -> Option<Properties> {
        self.properties.read().clone()
    }

    pub fn set_properties(&self, properties: Option<Properties>) {
        *self.properties.write() = properties;
    }

    pub fn definition(&self) -> Option<String> {
        self.definition.read().clone()
    }

    pub fn set_definition(&self, definition: Option<String>) {
        *self.definition.write() = definition;
    }

    /// Metadata about the options this module accepts
    ///
    /// Resolved on first call and cached, including a `None` result. Concurrent
    /// first callers wait for a single resolution. Errors are returned without
    /// being cached.
    pub fn options_metadata(&self) -> Result<Option<Arc<OptionsMetadata>>, ModuleError> {
        let mut cached = self.options_metadata.lock();
        if let Some(metadata) = cached.as_ref() {
            return Ok(metadata.clone());
        }

        debug!("Resolving options metadata for {}", self);
        let resolved = OptionsMetadataResolver::resolve(self)?.map(Arc::new);
        *cached = Some(resolved.clone());
        Ok(resolved)
    }
}

impl fmt::Display for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let jars = self.classpath.as_ref().map_or(0, Vec::len);
        write!(
            f,
            "ModuleDescriptor[{}:{} with {} jars at {}]",
            self.module_type,
            self.name,
            jars,
            self.resource.description()
        )
    }
}

/// Builder for [`ModuleDescriptor`]
#[derive(Debug, Default)]
pub struct ModuleDescriptorBuilder {
    name: Option<String>,
    module_type: Option<ModuleType>,
    resource: Option<Arc<dyn Resource>>,
    classpath: Vec<Location>,
    type_resolver: Option<Arc<dyn TypeResolver>>,
}

impl ModuleDescriptorBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn module_type(mut self, module_type: ModuleType) -> Self {
        self.module_type = Some(module_type);
        self
    }

    pub fn resource(mut self, resource: Arc<dyn Resource>) -> Self {
        self.resource = Some(resource);
        self
    }

    pub fn classpath(mut self, classpath: Vec<Location>) -> Self {
        self.classpath = classpath;
        self
    }

    /// Resolver for `options_class` and option types; defaults to the shared
    /// scalar registry
    pub fn type_resolver(mut self, type_resolver: Arc<dyn TypeResolver>) -> Self {
        self.type_resolver = Some(type_resolver);
        self
    }

    /// Validate and build the descriptor
    pub fn build(self) -> Result<ModuleDescriptor, ModuleError> {
        let name = ensure_some(self.name, "name").map_err(ModuleError::InvalidArgument)?;
        ensure_not_blank(&name, "name").map_err(ModuleError::InvalidArgument)?;
        let module_type =
            ensure_some(self.module_type, "type").map_err(ModuleError::InvalidArgument)?;
        let resource =
            ensure_some(self.resource, "resource").map_err(ModuleError::InvalidArgument)?;

        let classpath = if self.classpath.is_empty() {
            None
        } else {
            Some(self.classpath)
        };
        let type_resolver = self
            .type_resolver
            .unwrap_or_else(|| TypeRegistry::shared_scalar() as Arc<dyn TypeResolver>);

        Ok(ModuleDescriptor {
            name,
            module_type,
            resource,
            classpath,
            properties: RwLock::new(None),
            definition: RwLock::new(None),
            type_resolver,
            options_metadata: Mutex::new(None),
        })
    }
}
