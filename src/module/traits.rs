//! Module system types and errors
//!
//! Defines the module categories and the error taxonomy shared by descriptor
//! construction and options resolution.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::module::manifest::PropertiesError;

/// Module category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    /// Produces messages
    Source,
    /// Transforms messages
    Processor,
    /// Consumes messages
    Sink,
    /// Batch job
    Job,
}

impl ModuleType {
    /// All module categories, in declaration order
    pub const ALL: [ModuleType; 4] = [
        ModuleType::Source,
        ModuleType::Processor,
        ModuleType::Sink,
        ModuleType::Job,
    ];

    /// Lower-case textual form
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleType::Source => "source",
            ModuleType::Processor => "processor",
            ModuleType::Sink => "sink",
            ModuleType::Job => "job",
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleType {
    type Err = ModuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModuleError::InvalidArgument(format!("Unknown module type: {}", s)))
    }
}

/// Module system errors
///
/// A missing companion resource is not an error: resolution reports it as
/// `Ok(None)`.
#[derive(Debug, Error)]
pub enum ModuleError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unable to load class used by options metadata: {class_name} ({reason})")]
    ClassResolution { class_name: String, reason: String },

    #[error("Can't find class used for type of option '{option}': {type_name} ({reason})")]
    TypeResolution {
        option: String,
        type_name: String,
        reason: String,
    },

    #[error("Invalid companion properties: {0}")]
    InvalidProperties(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<PropertiesError> for ModuleError {
    fn from(e: PropertiesError) -> Self {
        ModuleError::InvalidProperties(e.to_string())
    }
}

impl From<anyhow::Error> for ModuleError {
    fn from(e: anyhow::Error) -> Self {
        ModuleError::Config(e.to_string())
    }
}
