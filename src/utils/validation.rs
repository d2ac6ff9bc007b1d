//! Validation utilities
//!
//! Provides helpers for common validation patterns. Errors are plain messages
//! that callers wrap into their own error type.

/// Ensure a condition is true, or return an error
///
/// # Example
/// ```rust
/// use module_options::utils::ensure;
///
/// let value = 3;
/// assert!(ensure(value > 0, "Value must be positive").is_ok());
/// ```
pub fn ensure(condition: bool, message: &str) -> Result<(), String> {
    if condition {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// Ensure a condition is true with a lazily formatted error message
pub fn ensure_fmt<F>(condition: bool, message: F) -> Result<(), String>
where
    F: FnOnce() -> String,
{
    if condition {
        Ok(())
    } else {
        Err(message())
    }
}

/// Validate a string is not empty
pub fn ensure_not_blank(value: &str, name: &str) -> Result<(), String> {
    if value.is_empty() {
        Err(format!("{} cannot be blank", name))
    } else {
        Ok(())
    }
}

/// Validate a value is not None
///
/// Returns `Ok(value)` if Some, error if None.
pub fn ensure_some<T>(value: Option<T>, name: &str) -> Result<T, String> {
    value.ok_or_else(|| format!("{} cannot be null", name))
}
