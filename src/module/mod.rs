//! Module system for module-options
//!
//! This module provides module descriptors and the resolution of the options
//! each module accepts.
//!
//! ## Architecture
//!
//! - **Descriptors**: identity of a module plus a lazily resolved, cached options schema
//! - **Resources**: abstract access to the module's backing location and its companions
//! - **Manifest**: the properties text format used by companion resources
//! - **Type Resolution**: child-first lookup of named types over a module classpath
//! - **Options**: the option schema model and the resolver that builds it

pub mod descriptor;
pub mod loader;
pub mod manifest;
pub mod options;
pub mod registry;
pub mod resource;
pub mod traits;

pub use descriptor::{ModuleDescriptor, ModuleDescriptorBuilder};
pub use loader::{Location, TypeHandle, TypeOrigin, TypeResolutionFailure, TypeResolver};
pub use manifest::{Properties, PropertiesError};
pub use options::{
    ClassOptionsMetadata, ModuleOption, OptionsMetadata, OptionsMetadataResolver,
    SimpleOptionsMetadata,
};
pub use registry::{TypeDefinition, TypeRegistry};
pub use resource::{DescriptiveResource, FileResource, MemoryResource, Resource};
pub use traits::{ModuleError, ModuleType};
