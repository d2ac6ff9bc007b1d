//! Registry-backed type resolution

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tracing::debug;

use crate::module::loader::{
    search_order, Location, TypeHandle, TypeOrigin, TypeResolutionFailure, TypeResolver,
};
use crate::module::registry::definition::TypeDefinition;
use crate::module::traits::ModuleError;

/// Scalar types every registry created with [`TypeRegistry::with_scalar_types`] knows
pub const SCALAR_TYPES: [&str; 7] = ["string", "int", "long", "float", "double", "boolean", "char"];

/// Catalog of type definitions, ambient or attached to classpath locations
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    ambient: HashMap<String, Arc<TypeDefinition>>,
    locations: HashMap<Location, HashMap<String, Arc<TypeDefinition>>>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry that knows the scalar types
    pub fn with_scalar_types() -> Self {
        let mut registry = Self::new();
        for name in SCALAR_TYPES {
            registry
                .ambient
                .insert(name.to_string(), Arc::new(TypeDefinition::new(name)));
        }
        registry
    }

    /// Shared scalar-only registry used when a descriptor has no resolver of its own
    pub fn shared_scalar() -> Arc<TypeRegistry> {
        static SHARED: OnceLock<Arc<TypeRegistry>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(TypeRegistry::with_scalar_types())))
    }

    /// Register a type in the ambient scope, replacing any same-named type
    pub fn register_ambient(&mut self, definition: TypeDefinition) -> Result<(), ModuleError> {
        Self::check_name(definition.name())?;
        debug!("Registering ambient type {}", definition.name());
        self.ambient
            .insert(definition.name().to_string(), Arc::new(definition));
        Ok(())
    }

    /// Register a type at a classpath location, replacing any same-named type there
    pub fn register_at(
        &mut self,
        location: impl Into<Location>,
        definition: TypeDefinition,
    ) -> Result<(), ModuleError> {
        Self::check_name(definition.name())?;
        let location = location.into();
        debug!("Registering type {} at {}", definition.name(), location);
        self.locations
            .entry(location)
            .or_default()
            .insert(definition.name().to_string(), Arc::new(definition));
        Ok(())
    }

    /// Whether `name` is known in the ambient scope
    pub fn contains_ambient(&self, name: &str) -> bool {
        self.ambient.contains_key(name)
    }

    /// Number of registered types across all scopes
    pub fn len(&self) -> usize {
        self.ambient.len() + self.locations.values().map(HashMap::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_name(name: &str) -> Result<(), ModuleError> {
        if is_valid_type_name(name) {
            Ok(())
        } else {
            Err(ModuleError::InvalidArgument(format!(
                "Invalid type name: '{}'",
                name
            )))
        }
    }

    fn lookup(&self, origin: &TypeOrigin, name: &str) -> Option<Arc<TypeDefinition>> {
        match origin {
            TypeOrigin::Ambient => self.ambient.get(name).cloned(),
            TypeOrigin::Classpath(location) => self
                .locations
                .get(location)
                .and_then(|types| types.get(name))
                .cloned(),
        }
    }
}

impl TypeResolver for TypeRegistry {
    fn resolve(&self, name: &str, classpath: &[Location]) -> Result<TypeHandle, TypeResolutionFailure> {
        if !is_valid_type_name(name) {
            return Err(TypeResolutionFailure::InvalidName(name.to_string()));
        }

        for origin in search_order(classpath) {
            if let Some(definition) = self.lookup(&origin, name) {
                debug!("Resolved type {} from {}", name, origin);
                return Ok(TypeHandle::new(definition, origin));
            }
        }

        Err(TypeResolutionFailure::NotFound {
            name: name.to_string(),
            searched: classpath.len() + 1,
        })
    }
}

/// Type names are non-empty and free of whitespace and control characters
#[inline]
fn is_valid_type_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(|c| c.is_whitespace() || c.is_control())
}
