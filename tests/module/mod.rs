//! Module system tests
//!
//! Tests for module descriptors, companion resource handling, and options
//! metadata resolution.

pub mod test_utils;
pub mod resolver_tests;
