//! Module options - module descriptors and their options metadata
//!
//! This crate describes deployable modules (sources, processors, sinks, jobs)
//! and resolves the set of options each module accepts. Options are declared
//! in a companion `<module name>.properties` resource that sits next to the
//! module's own resource, either inline through reserved key patterns or by
//! naming a type whose declared fields form the option schema.
//!
//! ## Design Principles
//!
//! 1. **Absence is normal**: a module without a companion resource simply has
//!    no options metadata
//! 2. **Configuration errors are fatal**: unresolvable types abort resolution,
//!    never yielding partial metadata
//! 3. **Injected capabilities**: resource access and type resolution are traits
//!    so hosts can plug in their own storage and type catalogs
//! 4. **Resolve once**: a descriptor computes its metadata at most once
//!
//! ## Example
//!
//! ```rust,no_run
//! use module_options::module::{FileResource, ModuleDescriptor, ModuleType};
//! use std::sync::Arc;
//!
//! let resource = Arc::new(FileResource::new("modules/source/time.xml"));
//! let descriptor = ModuleDescriptor::new("time", ModuleType::Source, resource)?;
//! if let Some(metadata) = descriptor.options_metadata()? {
//!     for option in metadata.options() {
//!         println!("{}: {}", option.name(), option.description());
//!     }
//! }
//! # Ok::<(), module_options::module::ModuleError>(())
//! ```

pub mod config;
pub mod module;
pub mod utils;

pub use config::{LoggingConfig, ModuleOptionsConfig};
pub use module::{
    ModuleDescriptor, ModuleError, ModuleOption, ModuleType, OptionsMetadata,
    OptionsMetadataResolver,
};
