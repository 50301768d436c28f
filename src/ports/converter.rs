// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value converter trait definition.
//!
//! This module defines the `ValueConverter` trait, the port through which raw
//! property values are coerced, one step at a time, toward a descriptor's
//! declared value type. Converters are chained in insertion order on a
//! descriptor; each step may depend on the output type of the previous one.

use crate::domain::errors::Result;
use crate::domain::type_token::TypeToken;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Type alias for dynamically typed raw property values.
///
/// Property sources hand values to the conversion chain in this erased form;
/// converters consume and produce it. The `Arc` makes raw values cheap for a
/// source to clone out of its backing store.
pub type RawValue = Arc<dyn Any + Send + Sync>;

/// Wraps a concrete value as a [`RawValue`].
///
/// # Examples
///
/// ```
/// use propcfg::ports::converter::raw_value;
///
/// let raw = raw_value("5000".to_string());
/// assert!(raw.as_ref().is::<String>());
/// ```
pub fn raw_value<T: Send + Sync + 'static>(value: T) -> RawValue {
    Arc::new(value)
}

/// A trait for one step of a value conversion chain.
///
/// A converter declares the runtime type it accepts and the runtime type it
/// produces, and performs the coercion on dynamically typed values. The
/// descriptor holds converters as `Arc<dyn ValueConverter>`; chain equality is
/// `Arc` identity per element, so reuse the same `Arc` wherever two
/// descriptors are meant to compare equal.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; a frozen descriptor (and its chain)
/// is read concurrently.
///
/// # Examples
///
/// ```rust
/// use propcfg::ports::converter::{RawValue, ValueConverter};
/// use propcfg::domain::errors::{ConfigError, Result};
/// use propcfg::domain::type_token::TypeToken;
/// use std::sync::Arc;
///
/// #[derive(Debug)]
/// struct Doubler;
///
/// impl ValueConverter for Doubler {
///     fn source_type(&self) -> TypeToken {
///         TypeToken::of::<i64>()
///     }
///
///     fn target_type(&self) -> TypeToken {
///         TypeToken::of::<i64>()
///     }
///
///     fn convert(&self, value: RawValue) -> Result<RawValue> {
///         let n = value
///             .downcast::<i64>()
///             .map_err(|_| ConfigError::conversion::<i64, i64>("not an i64"))?;
///         Ok(Arc::new(*n * 2))
///     }
/// }
///
/// let doubled = Doubler.convert(Arc::new(21i64)).unwrap();
/// assert_eq!(doubled.downcast_ref::<i64>(), Some(&42));
/// ```
pub trait ValueConverter: fmt::Debug + Send + Sync {
    /// Returns the runtime type this converter accepts.
    fn source_type(&self) -> TypeToken;

    /// Returns the runtime type this converter produces.
    fn target_type(&self) -> TypeToken;

    /// Coerces one value from the source type to the target type.
    ///
    /// # Arguments
    ///
    /// * `value` - The dynamically typed input value
    ///
    /// # Returns
    ///
    /// * `Ok(RawValue)` - The coerced value, of the target type
    /// * `Err(ConfigError)` - The input was not of the source type, or the
    ///   coercion itself failed
    fn convert(&self, value: RawValue) -> Result<RawValue>;

    /// Returns `true` if `value`'s runtime type matches this converter's
    /// source type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use propcfg::ports::converter::{raw_value, RawValue, ValueConverter};
    /// # use propcfg::domain::errors::Result;
    /// # use propcfg::domain::type_token::TypeToken;
    /// # #[derive(Debug)]
    /// # struct Identity;
    /// # impl ValueConverter for Identity {
    /// #     fn source_type(&self) -> TypeToken { TypeToken::of::<String>() }
    /// #     fn target_type(&self) -> TypeToken { TypeToken::of::<String>() }
    /// #     fn convert(&self, value: RawValue) -> Result<RawValue> { Ok(value) }
    /// # }
    /// let converter = Identity;
    /// assert!(converter.accepts(&raw_value("yes".to_string())));
    /// assert!(!converter.accepts(&raw_value(1i64)));
    /// ```
    fn accepts(&self, value: &RawValue) -> bool {
        value.as_ref().type_id() == self.source_type().id()
    }
}
