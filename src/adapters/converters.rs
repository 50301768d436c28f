// SPDX-License-Identifier: MIT OR Apache-2.0

//! Closure-backed value converters and shared stock instances.
//!
//! This module provides [`FnConverter`], an adapter that lifts an ordinary
//! typed closure into the [`ValueConverter`] port, plus a small set of stock
//! string-parsing converters for the common primitive value types.
//!
//! The stock converters are process-wide shared instances. Chain equality is
//! `Arc` identity per element, so two descriptors built independently from
//! the same stock accessor still compare equal.
//!
//! # Examples
//!
//! ```rust
//! use propcfg::adapters::converters::string_to_i64;
//! use propcfg::ports::converter::{raw_value, ValueConverter};
//!
//! let converter = string_to_i64();
//! let converted = converter.convert(raw_value("5000".to_string())).unwrap();
//! assert_eq!(converted.downcast_ref::<i64>(), Some(&5000));
//! ```

use crate::domain::errors::{ConfigError, Result};
use crate::domain::type_token::TypeToken;
use crate::ports::converter::{raw_value, RawValue, ValueConverter};
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;

/// A [`ValueConverter`] backed by a plain conversion closure.
///
/// `FnConverter` handles the dynamic typing so the closure does not have to:
/// the input is downcast to `S` before the closure runs and the output is
/// re-erased afterwards. A value of any other runtime type is rejected with a
/// conversion error.
///
/// # Examples
///
/// ```rust
/// use propcfg::adapters::converters::FnConverter;
/// use propcfg::ports::converter::{raw_value, ValueConverter};
///
/// let upper = FnConverter::<String, String>::new(|raw| Ok(raw.to_uppercase()));
/// let converted = upper.convert(raw_value("on".to_string())).unwrap();
/// assert_eq!(converted.downcast_ref::<String>().unwrap(), "ON");
/// ```
pub struct FnConverter<S, T> {
    /// The typed conversion function
    func: Box<dyn Fn(&S) -> Result<T> + Send + Sync>,
}

impl<S, T> FnConverter<S, T> {
    /// Creates a converter from `S` to `T` backed by `func`.
    ///
    /// # Arguments
    ///
    /// * `func` - The conversion applied to every accepted input value
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&S) -> Result<T> + Send + Sync + 'static,
    {
        FnConverter {
            func: Box::new(func),
        }
    }
}

impl<S: 'static, T: 'static> fmt::Debug for FnConverter<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnConverter")
            .field("source_type", &TypeToken::of::<S>())
            .field("target_type", &TypeToken::of::<T>())
            .finish()
    }
}

impl<S, T> ValueConverter for FnConverter<S, T>
where
    S: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    fn source_type(&self) -> TypeToken {
        TypeToken::of::<S>()
    }

    fn target_type(&self) -> TypeToken {
        TypeToken::of::<T>()
    }

    fn convert(&self, value: RawValue) -> Result<RawValue> {
        let source = value
            .downcast::<S>()
            .map_err(|_| ConfigError::conversion::<S, T>("input is not of the source type"))?;
        let converted = (self.func)(source.as_ref())?;
        Ok(raw_value(converted))
    }
}

/// Shared string-to-i32 converter instance
static STRING_TO_I32: Lazy<Arc<dyn ValueConverter>> = Lazy::new(|| {
    Arc::new(FnConverter::<String, i32>::new(|raw| {
        raw.parse::<i32>()
            .map_err(|e| ConfigError::conversion::<String, i32>(e.to_string()))
    }))
});

/// Shared string-to-i64 converter instance
static STRING_TO_I64: Lazy<Arc<dyn ValueConverter>> = Lazy::new(|| {
    Arc::new(FnConverter::<String, i64>::new(|raw| {
        raw.parse::<i64>()
            .map_err(|e| ConfigError::conversion::<String, i64>(e.to_string()))
    }))
});

/// Shared string-to-f64 converter instance
static STRING_TO_F64: Lazy<Arc<dyn ValueConverter>> = Lazy::new(|| {
    Arc::new(FnConverter::<String, f64>::new(|raw| {
        raw.parse::<f64>()
            .map_err(|e| ConfigError::conversion::<String, f64>(e.to_string()))
    }))
});

/// Shared string-to-bool converter instance
static STRING_TO_BOOL: Lazy<Arc<dyn ValueConverter>> = Lazy::new(|| {
    Arc::new(FnConverter::<String, bool>::new(|raw| {
        match raw.to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => raw
                .parse::<bool>()
                .map_err(|e| ConfigError::conversion::<String, bool>(e.to_string())),
        }
    }))
});

/// Returns the shared `String` to `i32` parsing converter.
pub fn string_to_i32() -> Arc<dyn ValueConverter> {
    Arc::clone(&STRING_TO_I32)
}

/// Returns the shared `String` to `i64` parsing converter.
///
/// # Examples
///
/// ```rust
/// use propcfg::adapters::converters::string_to_i64;
/// use std::sync::Arc;
///
/// // Every call hands out the same shared instance.
/// assert!(Arc::ptr_eq(&string_to_i64(), &string_to_i64()));
/// ```
pub fn string_to_i64() -> Arc<dyn ValueConverter> {
    Arc::clone(&STRING_TO_I64)
}

/// Returns the shared `String` to `f64` parsing converter.
pub fn string_to_f64() -> Arc<dyn ValueConverter> {
    Arc::clone(&STRING_TO_F64)
}

/// Returns the shared `String` to `bool` parsing converter.
///
/// Recognizes the following values (case-insensitive):
/// - `true`: "true", "yes", "1", "on"
/// - `false`: "false", "no", "0", "off"
pub fn string_to_bool() -> Arc<dyn ValueConverter> {
    Arc::clone(&STRING_TO_BOOL)
}
