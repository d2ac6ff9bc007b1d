//! Module options metadata
//!
//! Models the options a module accepts and resolves them from the module's
//! companion properties resource.

pub mod metadata;
pub mod option;
pub mod resolver;

pub use metadata::{ClassOptionsMetadata, OptionsMetadata, SimpleOptionsMetadata};
pub use option::ModuleOption;
pub use resolver::{OptionsMetadataResolver, OPTIONS_CLASS};
