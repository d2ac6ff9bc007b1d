//! Companion manifest handling
//!
//! Companion resources use the line-oriented properties text format.

pub mod properties;

pub use properties::{Properties, PropertiesError};
