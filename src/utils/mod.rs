//! Utility modules for logging and argument validation

pub mod logging;
pub mod validation;

pub use logging::{init_logging, init_logging_from_config, init_module_logging};
#[cfg(feature = "json-logging")]
pub use logging::init_json_logging;
pub use validation::{ensure, ensure_fmt, ensure_not_blank, ensure_some};
