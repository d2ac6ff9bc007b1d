//! Type definitions

use crate::module::options::ModuleOption;

/// A named type and the option fields it declares
///
/// The fields play the role of the type's properties: when a module names
/// this type as its options class, each field becomes one module option.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDefinition {
    name: String,
    fields: Vec<ModuleOption>,
}

impl TypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a declared field, builder style
    pub fn with_field(mut self, field: ModuleOption) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[ModuleOption] {
        &self.fields
    }
}
