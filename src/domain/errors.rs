// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the property descriptor crate.
//!
//! This module defines the error types that can occur when building property
//! descriptors or resolving their values. All errors use `thiserror` for
//! proper error handling and conversion.

use thiserror::Error;

/// The main error type for property descriptor operations.
///
/// Descriptor construction itself can only fail with [`ConfigError::InvalidArgument`]
/// (a required builder field was never set). The remaining variants belong to
/// the collaborator surfaces: converters and property sources. The enum is
/// marked `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use propcfg::domain::errors::ConfigError;
///
/// fn check_key(key: Option<&str>) -> Result<(), ConfigError> {
///     key.map(|_| ()).ok_or(ConfigError::InvalidArgument { name: "key" })
/// }
///
/// assert!(check_key(None).is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A required argument or builder field was not provided.
    #[error("invalid argument: {name} is required")]
    InvalidArgument {
        /// The name of the missing argument or field
        name: &'static str,
    },

    /// A converter failed to coerce a value toward its target type.
    #[error("conversion from {source_type} to {target_type} failed: {message}")]
    ConversionError {
        /// The converter's declared source type
        source_type: &'static str,
        /// The converter's declared target type
        target_type: &'static str,
        /// What went wrong
        message: String,
    },

    /// An error occurred in a property source.
    #[error("property source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Creates a `ConversionError` for a conversion from `S` to `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use propcfg::domain::errors::ConfigError;
    ///
    /// let error = ConfigError::conversion::<String, i64>("not a number");
    /// assert!(error.to_string().contains("i64"));
    /// ```
    pub fn conversion<S: ?Sized + 'static, T: ?Sized + 'static>(
        message: impl Into<String>,
    ) -> Self {
        ConfigError::ConversionError {
            source_type: std::any::type_name::<S>(),
            target_type: std::any::type_name::<T>(),
            message: message.into(),
        }
    }

    /// Creates a `SourceError` without an underlying cause.
    pub fn source_error(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::SourceError {
            source_name: source_name.into(),
            message: message.into(),
            source: None,
        }
    }
}

/// A specialized Result type for property descriptor operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let error = ConfigError::InvalidArgument { name: "key" };
        assert_eq!(error.to_string(), "invalid argument: key is required");
    }

    #[test]
    fn test_invalid_argument_names_value_type() {
        let error = ConfigError::InvalidArgument { name: "value_type" };
        assert_eq!(
            error.to_string(),
            "invalid argument: value_type is required"
        );
    }

    #[test]
    fn test_conversion_error_display() {
        let error = ConfigError::ConversionError {
            source_type: "alloc::string::String",
            target_type: "i64",
            message: "invalid digit found in string".to_string(),
        };
        assert!(error.to_string().contains("String"));
        assert!(error.to_string().contains("i64"));
        assert!(error.to_string().contains("invalid digit"));
    }

    #[test]
    fn test_conversion_helper() {
        let error = ConfigError::conversion::<String, bool>("unrecognized value");
        assert!(matches!(error, ConfigError::ConversionError { .. }));
        assert_eq!(
            error.to_string(),
            "conversion from alloc::string::String to bool failed: unrecognized value"
        );
    }

    #[test]
    fn test_source_error_display() {
        let error = ConfigError::source_error("in-memory", "backing map poisoned");
        assert_eq!(
            error.to_string(),
            "property source 'in-memory' error: backing map poisoned"
        );
    }

    #[test]
    fn test_source_error_with_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let error = ConfigError::SourceError {
            source_name: "test".to_string(),
            message: "lookup failed".to_string(),
            source: Some(Box::new(cause)),
        };
        assert!(std::error::Error::source(&error).is_some());
    }
}
