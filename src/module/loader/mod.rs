//! Dynamic type resolution
//!
//! Resolves named types for modules, searching the module's own classpath
//! before the ambient scope.

pub mod loader;

pub use loader::{
    search_order, Location, TypeHandle, TypeOrigin, TypeResolutionFailure, TypeResolver,
};
