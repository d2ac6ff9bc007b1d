//! Configuration management for module-options
//!
//! Handles loading and validating configuration: logging settings and the
//! type definitions that back options classes and option types.
//!
//! ```toml
//! [logging]
//! filter = "module_options=debug"
//!
//! [[types]]
//! name = "com.example.HttpOptions"
//! location = "lib/http.jar"
//!
//! [[types.fields]]
//! name = "port"
//! description = "Port to listen on"
//! default = "8080"
//! type = "int"
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::module::loader::{Location, TypeResolver};
use crate::module::options::ModuleOption;
use crate::module::registry::{TypeDefinition, TypeRegistry};
use crate::utils::{ensure, ensure_fmt};

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log filter (e.g., "info", "module_options=debug"); RUST_LOG takes precedence
    #[serde(default)]
    pub filter: Option<String>,

    /// Emit JSON instead of human-readable lines
    #[serde(default)]
    pub json_format: bool,
}

/// A configured type definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeConfig {
    /// Fully-qualified type name
    pub name: String,

    /// Classpath location the type lives at; ambient when absent
    #[serde(default)]
    pub location: Option<String>,

    /// Declared fields, each one an option
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

/// A configured type field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub default: Option<String>,

    /// Ambient type of the field
    #[serde(default, rename = "type")]
    pub field_type: Option<String>,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleOptionsConfig {
    #[serde(default)]
    pub logging: Option<LoggingConfig>,

    #[serde(default)]
    pub types: Vec<TypeConfig>,
}

impl ModuleOptionsConfig {
    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config file {}", path.display()))
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: ModuleOptionsConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML text
    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        let mut seen: HashSet<(Option<&str>, &str)> = HashSet::new();

        for type_config in &self.types {
            ensure(!type_config.name.trim().is_empty(), "Type name cannot be empty")
                .map_err(anyhow::Error::msg)?;
            ensure_fmt(
                seen.insert((type_config.location.as_deref(), type_config.name.as_str())),
                || {
                    format!(
                        "Type {} is declared twice at {}",
                        type_config.name,
                        type_config.location.as_deref().unwrap_or("ambient scope")
                    )
                },
            )
            .map_err(anyhow::Error::msg)?;

            let mut field_names = HashSet::new();
            for field in &type_config.fields {
                ensure_fmt(is_valid_option_name(&field.name), || {
                    format!(
                        "Invalid field name '{}' in type {} (must be letters, digits, dashes or underscores)",
                        field.name, type_config.name
                    )
                })
                .map_err(anyhow::Error::msg)?;
                ensure_fmt(field_names.insert(field.name.as_str()), || {
                    format!("Field {} is declared twice in type {}", field.name, type_config.name)
                })
                .map_err(anyhow::Error::msg)?;
            }
        }

        Ok(())
    }

    /// Build a registry with the scalar types plus every configured type
    ///
    /// Field types resolve in the ambient scope as it stands when the field's
    /// type is processed, so a field may refer to scalar types and to ambient
    /// types declared earlier in the file.
    pub fn build_registry(&self) -> anyhow::Result<TypeRegistry> {
        let mut registry = TypeRegistry::with_scalar_types();

        for type_config in &self.types {
            let mut definition = TypeDefinition::new(&type_config.name);
            for field in &type_config.fields {
                let mut option = ModuleOption::new(&field.name, &field.description);
                if let Some(default_value) = &field.default {
                    option = option.with_default_value(default_value);
                }
                if let Some(field_type) = &field.field_type {
                    let handle = registry.resolve_ambient(field_type).with_context(|| {
                        format!(
                            "Unknown type {} for field {} of {}",
                            field_type, field.name, type_config.name
                        )
                    })?;
                    option = option.with_type(handle);
                }
                definition = definition.with_field(option);
            }

            match &type_config.location {
                Some(location) => registry.register_at(Location::from(location.as_str()), definition)?,
                None => registry.register_ambient(definition)?,
            }
        }

        Ok(registry)
    }
}

fn is_valid_option_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
