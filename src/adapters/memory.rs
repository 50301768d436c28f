// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory property source adapter.
//!
//! This module provides a map-backed [`PropertySource`] implementation. It is
//! the simplest source the crate ships: values are stored up front, lookups
//! never fail, and there is no reload story. Useful as the backing source in
//! tests and for programmatically assembled configuration.

use crate::domain::errors::Result;
use crate::ports::converter::{raw_value, RawValue};
use crate::ports::source::PropertySource;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Property source adapter backed by an in-memory map.
///
/// Values are stored in their dynamically typed form, so a source can hold
/// raw strings awaiting conversion next to values that already have their
/// final type.
///
/// # Examples
///
/// ```rust
/// use propcfg::adapters::memory::InMemorySource;
/// use propcfg::ports::source::PropertySource;
///
/// let source = InMemorySource::<String>::new("defaults")
///     .with_value("timeout.ms", "5000".to_string())
///     .with_value("retries", 3i64);
///
/// let raw = source.get(&"timeout.ms".to_string()).unwrap().unwrap();
/// assert_eq!(raw.downcast_ref::<String>().unwrap(), "5000");
/// ```
pub struct InMemorySource<K> {
    /// Name reported in diagnostics
    name: String,
    /// Backing store of raw values
    values: HashMap<K, RawValue>,
}

impl<K: Eq + Hash> InMemorySource<K> {
    /// Creates a new, empty source with the given diagnostic name.
    ///
    /// # Arguments
    ///
    /// * `name` - The name this source reports from [`PropertySource::name`]
    pub fn new(name: impl Into<String>) -> Self {
        InMemorySource {
            name: name.into(),
            values: HashMap::new(),
        }
    }

    /// Adds a value and returns the source, for chained construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use propcfg::adapters::memory::InMemorySource;
    ///
    /// let source = InMemorySource::<String>::new("test")
    ///     .with_value("app.name", "orchard".to_string());
    /// ```
    pub fn with_value(mut self, key: impl Into<K>, value: impl Send + Sync + 'static) -> Self {
        self.values.insert(key.into(), raw_value(value));
        self
    }

    /// Inserts or overwrites a value.
    pub fn set(&mut self, key: impl Into<K>, value: impl Send + Sync + 'static) {
        self.values.insert(key.into(), raw_value(value));
    }
}

impl<K: fmt::Debug> fmt::Debug for InMemorySource<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemorySource")
            .field("name", &self.name)
            .field("len", &self.values.len())
            .finish()
    }
}

impl<K> PropertySource<K> for InMemorySource<K>
where
    K: Eq + Hash + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &K) -> Result<Option<RawValue>> {
        Ok(self.values.get(key).cloned())
    }
}
