//! Options metadata variants

use crate::module::loader::TypeHandle;
use crate::module::options::ModuleOption;

/// The option schema of a module
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsMetadata {
    /// Schema delegated to a resolved type's declared fields
    Class(ClassOptionsMetadata),
    /// Schema enumerated from `options.<name>.*` property keys
    Simple(SimpleOptionsMetadata),
}

impl OptionsMetadata {
    /// All options, in declaration (or discovery) order
    pub fn options(&self) -> &[ModuleOption] {
        match self {
            OptionsMetadata::Class(metadata) => metadata.options(),
            OptionsMetadata::Simple(metadata) => metadata.options(),
        }
    }

    /// Look up an option by name
    pub fn option(&self, name: &str) -> Option<&ModuleOption> {
        self.options().iter().find(|o| o.name() == name)
    }

    pub fn is_class_backed(&self) -> bool {
        matches!(self, OptionsMetadata::Class(_))
    }

    /// The type backing a class-backed schema
    pub fn options_type(&self) -> Option<&TypeHandle> {
        match self {
            OptionsMetadata::Class(metadata) => Some(metadata.options_type()),
            OptionsMetadata::Simple(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.options().len()
    }

    pub fn is_empty(&self) -> bool {
        self.options().is_empty()
    }
}

impl<'a> IntoIterator for &'a OptionsMetadata {
    type Item = &'a ModuleOption;
    type IntoIter = std::slice::Iter<'a, ModuleOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options().iter()
    }
}

/// Schema backed by a type
#[derive(Debug, Clone, PartialEq)]
pub struct ClassOptionsMetadata {
    options_type: TypeHandle,
}

impl ClassOptionsMetadata {
    pub fn new(options_type: TypeHandle) -> Self {
        Self { options_type }
    }

    pub fn options_type(&self) -> &TypeHandle {
        &self.options_type
    }

    pub fn options(&self) -> &[ModuleOption] {
        self.options_type.options()
    }
}

/// Schema built option by option
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleOptionsMetadata {
    options: Vec<ModuleOption>,
}

impl SimpleOptionsMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, option: ModuleOption) {
        self.options.push(option);
    }

    pub fn options(&self) -> &[ModuleOption] {
        &self.options
    }
}
