//! Type resolution capability
//!
//! A [`TypeResolver`] turns a fully-qualified type name into a [`TypeHandle`].
//! Resolution is child-first: the locations of a module classpath are searched
//! in order, and the ambient scope is consulted last, so a module's own types
//! shadow same-named ambient ones.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::module::options::ModuleOption;
use crate::module::registry::TypeDefinition;

/// Location on a module classpath (a jar, a directory, a URL)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(s: &str) -> Self {
        Location::new(s)
    }
}

impl From<String> for Location {
    fn from(s: String) -> Self {
        Location(s)
    }
}

impl From<&Path> for Location {
    fn from(path: &Path) -> Self {
        Location(path.display().to_string())
    }
}

/// Where a resolved type was found
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeOrigin {
    /// Visible without any module classpath
    Ambient,
    /// Found at a module classpath location
    Classpath(Location),
}

impl fmt::Display for TypeOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeOrigin::Ambient => f.write_str("ambient"),
            TypeOrigin::Classpath(location) => write!(f, "classpath [{}]", location),
        }
    }
}

/// Search order for a classpath: each location in order, then ambient
pub fn search_order(classpath: &[Location]) -> impl Iterator<Item = TypeOrigin> + '_ {
    classpath
        .iter()
        .cloned()
        .map(TypeOrigin::Classpath)
        .chain(std::iter::once(TypeOrigin::Ambient))
}

/// A resolved type
#[derive(Debug, Clone, PartialEq)]
pub struct TypeHandle {
    definition: Arc<TypeDefinition>,
    origin: TypeOrigin,
}

impl TypeHandle {
    pub fn new(definition: Arc<TypeDefinition>, origin: TypeOrigin) -> Self {
        Self { definition, origin }
    }

    /// Fully-qualified type name
    pub fn name(&self) -> &str {
        self.definition.name()
    }

    pub fn definition(&self) -> &Arc<TypeDefinition> {
        &self.definition
    }

    pub fn origin(&self) -> &TypeOrigin {
        &self.origin
    }

    /// Options declared by the type's fields
    pub fn options(&self) -> &[ModuleOption] {
        self.definition.fields()
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.origin)
    }
}

/// Type resolution failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeResolutionFailure {
    #[error("type name '{0}' is not a valid identifier")]
    InvalidName(String),

    #[error("type '{name}' not found in {searched} location(s)")]
    NotFound { name: String, searched: usize },
}

/// Capability that resolves type names to handles
pub trait TypeResolver: Send + Sync + fmt::Debug {
    /// Resolve `name`, preferring `classpath` locations (in order) over the
    /// ambient scope
    fn resolve(&self, name: &str, classpath: &[Location]) -> Result<TypeHandle, TypeResolutionFailure>;

    /// Resolve `name` in the ambient scope only
    fn resolve_ambient(&self, name: &str) -> Result<TypeHandle, TypeResolutionFailure> {
        self.resolve(name, &[])
    }
}
