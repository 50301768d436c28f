// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property resolution trait.

use crate::domain::errors::Result;
use crate::domain::property::PropertyDescriptor;

/// Turns a property descriptor into an effective value.
///
/// A resolver owns the lookup side of the story: where raw values come from
/// and how a descriptor's converter chain, default value, and filter are
/// applied to them. Descriptors stay pure data; resolvers are the behavior
/// that interprets them.
///
/// The crate ships [`DefaultPropertyResolver`] backed by a single
/// [`PropertySource`]; custom resolvers only need this one method.
///
/// [`DefaultPropertyResolver`]: crate::service::DefaultPropertyResolver
/// [`PropertySource`]: crate::ports::source::PropertySource
///
/// # Examples
///
/// ```rust
/// use propcfg::domain::property::PropertyDescriptor;
/// use propcfg::domain::resolver::PropertyResolver;
/// use propcfg::domain::Result;
///
/// /// Ignores sources entirely and answers with the descriptor default.
/// struct DefaultsOnly;
///
/// impl<K, V: Clone> PropertyResolver<K, V> for DefaultsOnly {
///     fn resolve(&self, descriptor: &dyn PropertyDescriptor<K, V>) -> Result<Option<V>> {
///         Ok(descriptor.default_value().cloned())
///     }
/// }
/// ```
pub trait PropertyResolver<K, V> {
    /// Resolves the effective value for `descriptor`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(value))` - A usable value was found or defaulted
    /// * `Ok(None)` - No source supplied a value and the descriptor has no
    ///   default
    /// * `Err(error)` - A source failed in a way resolution cannot absorb
    fn resolve(&self, descriptor: &dyn PropertyDescriptor<K, V>) -> Result<Option<V>>;
}
