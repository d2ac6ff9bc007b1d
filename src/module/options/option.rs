//! A single module option

use std::fmt;

use crate::module::loader::TypeHandle;

/// An option a module accepts
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleOption {
    name: String,
    description: String,
    default_value: Option<String>,
    option_type: Option<TypeHandle>,
}

impl ModuleOption {
    /// Create an option with no default and no declared type
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            default_value: None,
            option_type: None,
        }
    }

    /// Set the default value
    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// Set the declared type
    pub fn with_type(mut self, option_type: TypeHandle) -> Self {
        self.option_type = Some(option_type);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn option_type(&self) -> Option<&TypeHandle> {
        self.option_type.as_ref()
    }

    /// Name of the declared type, if any
    pub fn type_name(&self) -> Option<&str> {
        self.option_type.as_ref().map(TypeHandle::name)
    }
}

impl fmt::Display for ModuleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(type_name) = self.type_name() {
            write!(f, ": {}", type_name)?;
        }
        if let Some(default_value) = &self.default_value {
            write!(f, " = {}", default_value)?;
        }
        write!(f, " ({})", self.description)
    }
}
