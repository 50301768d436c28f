// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property source trait definition.
//!
//! This module defines the `PropertySource` trait, the port through which raw
//! property values enter the system. A source is consulted with a descriptor's
//! key and answers with a dynamically typed raw value; the descriptor's
//! converter chain then coerces that value toward the declared type.

use crate::domain::errors::Result;
use crate::ports::converter::RawValue;

/// A trait for property sources.
///
/// This trait defines the interface that all property sources must implement.
/// A source maps keys to raw values; it knows nothing about declared value
/// types, conversion, defaults, or filtering. Those belong to the descriptor
/// and the resolver consuming it.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow for use in multi-threaded
/// contexts.
///
/// # Examples
///
/// ```rust
/// use propcfg::ports::{PropertySource, RawValue};
/// use propcfg::domain::Result;
///
/// struct MySource;
///
/// impl PropertySource<String> for MySource {
///     fn name(&self) -> &str {
///         "my-source"
///     }
///
///     fn get(&self, _key: &String) -> Result<Option<RawValue>> {
///         // Implementation here
///         Ok(None)
///     }
/// }
/// ```
pub trait PropertySource<K>: Send + Sync {
    /// Returns the name of this property source.
    ///
    /// The name is used for logging, error messages, and debugging. It should
    /// be a short, descriptive identifier like "in-memory" or "fixture".
    fn name(&self) -> &str;

    /// Retrieves the raw value for the given key.
    ///
    /// # Arguments
    ///
    /// * `key` - The property key to look up
    ///
    /// # Returns
    ///
    /// * `Ok(Some(RawValue))` - The source supplies a value for the key
    /// * `Ok(None)` - The key is not present in this source
    /// * `Err(ConfigError)` - An error occurred while querying the source
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use propcfg::ports::{PropertySource, RawValue};
    /// # use propcfg::domain::Result;
    /// # use std::sync::Arc;
    /// # struct MySource;
    /// # impl PropertySource<String> for MySource {
    /// #     fn name(&self) -> &str { "my-source" }
    /// #     fn get(&self, key: &String) -> Result<Option<RawValue>> {
    /// #         if key == "app.name" {
    /// #             Ok(Some(Arc::new("demo".to_string())))
    /// #         } else {
    /// #             Ok(None)
    /// #         }
    /// #     }
    /// # }
    /// let source = MySource;
    /// let value = source.get(&"app.name".to_string()).unwrap();
    /// assert!(value.is_some());
    /// ```
    fn get(&self, key: &K) -> Result<Option<RawValue>>;
}
