//! Options metadata resolution
//!
//! Resolves the [`OptionsMetadata`] of a module from a companion resource
//! named `<module name>.properties`, located next to the module's resource.
//!
//! Strategies, in turn:
//!
//! 1. no companion resource (or it cannot be read): no metadata
//! 2. an `options_class` property: schema backed by that type, resolved
//!    against the module classpath first, then the ambient scope
//! 3. otherwise: schema built from `options.<name>.description` keys, with
//!    optional `options.<name>.default` and `options.<name>.type` siblings
//!
//! Option schemas are discovered in the iteration order of [`Properties`],
//! which is the order keys first appear in the companion file.

use regex::Regex;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, warn};

use crate::module::descriptor::ModuleDescriptor;
use crate::module::loader::{Location, TypeResolver};
use crate::module::manifest::Properties;
use crate::module::options::metadata::{
    ClassOptionsMetadata, OptionsMetadata, SimpleOptionsMetadata,
};
use crate::module::options::ModuleOption;
use crate::module::resource::Resource;
use crate::module::traits::ModuleError;

/// Property naming the type that backs the option schema
pub const OPTIONS_CLASS: &str = "options_class";

fn description_key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^options\.([a-zA-Z\-_0-9]+)\.description$")
            .expect("description key pattern is a valid regex")
    })
}

/// Resolves options metadata for module descriptors
pub struct OptionsMetadataResolver;

impl OptionsMetadataResolver {
    /// Resolve the options metadata of `descriptor`
    ///
    /// Returns `Ok(None)` when the companion resource is missing or any I/O
    /// error occurs while probing or reading it. Unresolvable types and
    /// malformed escapes are fatal.
    pub fn resolve(descriptor: &ModuleDescriptor) -> Result<Option<OptionsMetadata>, ModuleError> {
        let companion_name = format!("{}.properties", descriptor.name());

        let bytes = match Self::read_companion(descriptor.resource().as_ref(), &companion_name) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!("No {} for module {}", companion_name, descriptor.name());
                return Ok(None);
            }
            Err(e) => {
                debug!(
                    "Failed to read {} for module {}, treating as absent: {}",
                    companion_name,
                    descriptor.name(),
                    e
                );
                return Ok(None);
            }
        };

        let properties = Properties::parse(&bytes)?;
        Self::from_properties(
            &properties,
            descriptor.classpath().unwrap_or(&[]),
            descriptor.type_resolver(),
        )
        .map(Some)
    }

    /// Build metadata from an already parsed companion property set
    pub fn from_properties(
        properties: &Properties,
        classpath: &[Location],
        type_resolver: &dyn TypeResolver,
    ) -> Result<OptionsMetadata, ModuleError> {
        match properties.get(OPTIONS_CLASS).filter(|v| !v.is_empty()) {
            Some(class_name) => {
                debug!("Using class-backed options metadata: {}", class_name);
                Self::class_backed(class_name, classpath, type_resolver)
            }
            None => {
                debug!("Using pattern-backed options metadata");
                Self::pattern_backed(properties, type_resolver)
            }
        }
    }

    fn read_companion(
        resource: &dyn Resource,
        companion_name: &str,
    ) -> std::io::Result<Option<Vec<u8>>> {
        let companion: Arc<dyn Resource> = resource.create_relative(companion_name)?;
        if !companion.exists() {
            return Ok(None);
        }
        companion.read_bytes().map(Some)
    }

    fn class_backed(
        class_name: &str,
        classpath: &[Location],
        type_resolver: &dyn TypeResolver,
    ) -> Result<OptionsMetadata, ModuleError> {
        let handle = type_resolver.resolve(class_name, classpath).map_err(|e| {
            warn!("Unable to load options class {}: {}", class_name, e);
            ModuleError::ClassResolution {
                class_name: class_name.to_string(),
                reason: e.to_string(),
            }
        })?;
        info!("Options class {} resolved from {}", handle.name(), handle.origin());
        Ok(OptionsMetadata::Class(ClassOptionsMetadata::new(handle)))
    }

    fn pattern_backed(
        properties: &Properties,
        type_resolver: &dyn TypeResolver,
    ) -> Result<OptionsMetadata, ModuleError> {
        let pattern = description_key_pattern();
        let mut result = SimpleOptionsMetadata::new();

        for (key, description) in properties.iter() {
            let Some(captures) = pattern.captures(key) else {
                continue;
            };
            let option_name = &captures[1];

            let mut option = ModuleOption::new(option_name, description);
            if let Some(default_value) = properties.get(&format!("options.{}.default", option_name)) {
                option = option.with_default_value(default_value);
            }
            if let Some(type_name) = properties.get(&format!("options.{}.type", option_name)) {
                let handle = type_resolver.resolve_ambient(type_name).map_err(|e| {
                    warn!("Unable to resolve type of option '{}': {}", option_name, e);
                    ModuleError::TypeResolution {
                        option: option_name.to_string(),
                        type_name: type_name.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                option = option.with_type(handle);
            }

            result.add(option);
        }

        debug!("Discovered {} option(s)", result.options().len());
        Ok(OptionsMetadata::Simple(result))
    }
}
