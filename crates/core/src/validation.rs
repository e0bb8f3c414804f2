//! Configuration validation support

use config::ConfigError;
use serde::{Deserialize, Serialize};

/// Trait for validating configuration values
pub trait ValidateConfig: Serialize + for<'de> Deserialize<'de> {
    /// Validate the configuration
    ///
    /// Returns Ok(()) if valid, or an error describing what's wrong
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Common validation helpers
pub mod validators {
    use config::ConfigError;

    /// Validate that a string is not empty
    pub fn validate_not_empty(value: &str, field: &str) -> Result<(), ConfigError> {
        if value.trim().is_empty() {
            return Err(ConfigError::Message(format!("{field}: cannot be empty")));
        }
        Ok(())
    }

    /// Validate that a URL path prefix is either empty or starts with `/`
    pub fn validate_path_prefix(value: &str, field: &str) -> Result<(), ConfigError> {
        if !value.is_empty() && !value.starts_with('/') {
            return Err(ConfigError::Message(format!(
                "{field}: must start with '/'"
            )));
        }
        if value.ends_with('/') {
            return Err(ConfigError::Message(format!(
                "{field}: must not end with '/'"
            )));
        }
        Ok(())
    }

    /// Validate that a value is within range
    pub fn validate_range<T: PartialOrd + std::fmt::Display>(
        value: T,
        min: T,
        max: T,
        field: &str,
    ) -> Result<(), ConfigError> {
        if value < min || value > max {
            return Err(ConfigError::Message(format!(
                "{field}: must be between {min} and {max}"
            )));
        }
        Ok(())
    }
}
