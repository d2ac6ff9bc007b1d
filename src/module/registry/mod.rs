//! Type registry
//!
//! A compile-time or configuration-time catalog of named types, usable as the
//! [`TypeResolver`](crate::module::loader::TypeResolver) of module descriptors.

pub mod definition;
pub mod types;

pub use definition::TypeDefinition;
pub use types::{TypeRegistry, SCALAR_TYPES};
