// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default property resolver implementation.
//!
//! This module provides the default implementation of the `PropertyResolver`
//! trait. It consults a single property source for raw values and applies a
//! descriptor's conversion chain, default value, and filter to produce the
//! effective value.

use crate::domain::errors::Result;
use crate::domain::property::PropertyDescriptor;
use crate::domain::resolver::PropertyResolver;
use crate::ports::converter::RawValue;
use crate::ports::source::PropertySource;
use std::fmt;
use std::sync::Arc;

/// Default implementation of a property resolver.
///
/// Resolution proceeds key first, type second: the backing source is asked
/// for a raw value under the descriptor's key, the conversion chain coerces
/// that value toward the descriptor's declared type, and the descriptor's
/// default steps in whenever the source had nothing usable. The value filter,
/// if any, runs last and sees whichever value won.
///
/// A raw value nothing can coerce is not an error; it is logged and resolved
/// as if the source had no value at all. A failing source, by contrast, is
/// reported to the caller.
///
/// # Examples
///
/// ```rust
/// use propcfg::prelude::*;
///
/// # fn main() -> propcfg::domain::Result<()> {
/// let source = InMemorySource::<String>::new("settings")
///     .with_value("timeout.ms", "2500".to_string());
/// let resolver = DefaultPropertyResolver::new(source);
///
/// let mut builder = DefaultPropertyDescriptor::<String, i64>::builder();
/// builder
///     .set_key("timeout.ms".to_string())
///     .set_value_type(TypeToken::of::<i64>())
///     .set_default_value(5000)
///     .add_value_converter(string_to_i64());
/// let descriptor = builder.build()?;
///
/// assert_eq!(resolver.resolve(&descriptor)?, Some(2500));
/// # Ok(())
/// # }
/// ```
pub struct DefaultPropertyResolver<K> {
    /// The source consulted for raw values
    source: Box<dyn PropertySource<K>>,
}

impl<K> DefaultPropertyResolver<K> {
    /// Creates a resolver backed by the given property source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use propcfg::adapters::memory::InMemorySource;
    /// use propcfg::service::DefaultPropertyResolver;
    ///
    /// let resolver = DefaultPropertyResolver::new(InMemorySource::<String>::new("empty"));
    /// ```
    pub fn new(source: impl PropertySource<K> + 'static) -> Self {
        DefaultPropertyResolver {
            source: Box::new(source),
        }
    }

    /// Coerces a raw source value toward the descriptor's declared type.
    ///
    /// Returns `None` when the chain cannot produce a value of that type,
    /// leaving the caller to fall back to the default.
    fn apply_chain<V>(
        &self,
        descriptor: &dyn PropertyDescriptor<K, V>,
        raw: RawValue,
    ) -> Option<V>
    where
        K: fmt::Debug,
        V: Clone + 'static,
    {
        // Already the declared type; the chain is not consulted.
        if let Some(value) = raw.downcast_ref::<V>() {
            return Some(value.clone());
        }

        let mut current = raw;
        for converter in descriptor.value_converters() {
            if !converter.accepts(&current) {
                continue;
            }
            match converter.convert(Arc::clone(&current)) {
                Ok(next) => {
                    tracing::trace!(
                        "Applied converter {:?} for key {:?}",
                        converter,
                        descriptor.key()
                    );
                    current = next;
                }
                Err(e) => {
                    tracing::debug!(
                        "Conversion failed for key {:?} in source '{}': {}",
                        descriptor.key(),
                        self.source.name(),
                        e
                    );
                    return None;
                }
            }
        }

        match current.downcast_ref::<V>() {
            Some(value) => Some(value.clone()),
            None => {
                tracing::debug!(
                    "No converter produced the declared type {} for key {:?}",
                    descriptor.value_type(),
                    descriptor.key()
                );
                None
            }
        }
    }
}

impl<K> fmt::Debug for DefaultPropertyResolver<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultPropertyResolver")
            .field("source", &self.source.name())
            .finish()
    }
}

impl<K, V> PropertyResolver<K, V> for DefaultPropertyResolver<K>
where
    K: fmt::Debug,
    V: Clone + 'static,
{
    fn resolve(&self, descriptor: &dyn PropertyDescriptor<K, V>) -> Result<Option<V>> {
        let raw = self.source.get(descriptor.key())?;
        let converted = raw.and_then(|raw| self.apply_chain(descriptor, raw));

        let effective = match converted {
            Some(value) => Some(value),
            None => {
                if descriptor.default_value().is_some() {
                    tracing::debug!(
                        "Falling back to default value for key {:?}",
                        descriptor.key()
                    );
                }
                descriptor.default_value().cloned()
            }
        };

        Ok(effective.map(|value| match descriptor.value_filter() {
            Some(filter) => filter(value),
            None => value,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::converters::{string_to_bool, string_to_i64, FnConverter};
    use crate::adapters::memory::InMemorySource;
    use crate::domain::errors::ConfigError;
    use crate::domain::property::{
        DefaultPropertyDescriptor, DescriptorBuilder, ValueFilter,
    };
    use crate::domain::type_token::TypeToken;
    use crate::ports::converter::ValueConverter;

    // Source double whose lookups always fail
    #[derive(Debug)]
    struct BrokenSource;

    impl PropertySource<String> for BrokenSource {
        fn name(&self) -> &str {
            "broken"
        }

        fn get(&self, _key: &String) -> Result<Option<RawValue>> {
            Err(ConfigError::source_error("broken", "lookup failed"))
        }
    }

    fn timeout_descriptor() -> DefaultPropertyDescriptor<String, i64> {
        let mut builder = DefaultPropertyDescriptor::<String, i64>::builder();
        builder
            .set_key("timeout.ms".to_string())
            .set_value_type(TypeToken::of::<i64>())
            .set_default_value(5000)
            .add_value_converter(string_to_i64());
        builder.build().unwrap()
    }

    #[test]
    fn test_resolves_through_chain() {
        let source =
            InMemorySource::<String>::new("test").with_value("timeout.ms", "2500".to_string());
        let resolver = DefaultPropertyResolver::new(source);

        assert_eq!(resolver.resolve(&timeout_descriptor()).unwrap(), Some(2500));
    }

    #[test]
    fn test_resolves_raw_of_declared_type() {
        let source = InMemorySource::<String>::new("test").with_value("timeout.ms", 1234i64);
        let resolver = DefaultPropertyResolver::new(source);

        assert_eq!(resolver.resolve(&timeout_descriptor()).unwrap(), Some(1234));
    }

    #[test]
    fn test_absent_value_falls_back_to_default() {
        let resolver = DefaultPropertyResolver::new(InMemorySource::<String>::new("empty"));

        assert_eq!(resolver.resolve(&timeout_descriptor()).unwrap(), Some(5000));
    }

    #[test]
    fn test_unconvertible_value_falls_back_to_default() {
        let source =
            InMemorySource::<String>::new("test").with_value("timeout.ms", "fast".to_string());
        let resolver = DefaultPropertyResolver::new(source);

        assert_eq!(resolver.resolve(&timeout_descriptor()).unwrap(), Some(5000));
    }

    #[test]
    fn test_unconverted_type_falls_back_to_default() {
        // A raw type no chain element accepts
        let source = InMemorySource::<String>::new("test").with_value("timeout.ms", 2.5f64);
        let resolver = DefaultPropertyResolver::new(source);

        assert_eq!(resolver.resolve(&timeout_descriptor()).unwrap(), Some(5000));
    }

    #[test]
    fn test_absent_value_without_default_is_none() {
        let resolver = DefaultPropertyResolver::new(InMemorySource::<String>::new("empty"));

        let mut builder = DefaultPropertyDescriptor::<String, bool>::builder();
        builder
            .set_key("feature.enabled".to_string())
            .set_value_type(TypeToken::of::<bool>())
            .add_value_converter(string_to_bool());
        let descriptor = builder.build().unwrap();

        assert_eq!(resolver.resolve(&descriptor).unwrap(), None);
    }

    #[test]
    fn test_chain_applies_in_order() {
        let doubler: Arc<dyn ValueConverter> =
            Arc::new(FnConverter::<i64, i64>::new(|n| Ok(*n * 2)));

        let source =
            InMemorySource::<String>::new("test").with_value("timeout.ms", "100".to_string());
        let resolver = DefaultPropertyResolver::new(source);

        let mut builder = DefaultPropertyDescriptor::<String, i64>::builder();
        builder
            .set_key("timeout.ms".to_string())
            .set_value_type(TypeToken::of::<i64>())
            .add_value_converter(string_to_i64())
            .add_value_converter(doubler);
        let descriptor = builder.build().unwrap();

        assert_eq!(resolver.resolve(&descriptor).unwrap(), Some(200));
    }

    #[test]
    fn test_filter_applies_to_converted_value() {
        let clamp: ValueFilter<i64> = Arc::new(|v: i64| v.clamp(0, 1000));

        let source =
            InMemorySource::<String>::new("test").with_value("timeout.ms", "2500".to_string());
        let resolver = DefaultPropertyResolver::new(source);

        let mut builder = DefaultPropertyDescriptor::<String, i64>::builder();
        builder
            .set_key("timeout.ms".to_string())
            .set_value_type(TypeToken::of::<i64>())
            .add_value_converter(string_to_i64())
            .set_value_filter(clamp);
        let descriptor = builder.build().unwrap();

        assert_eq!(resolver.resolve(&descriptor).unwrap(), Some(1000));
    }

    #[test]
    fn test_filter_applies_to_default_value() {
        let clamp: ValueFilter<i64> = Arc::new(|v: i64| v.clamp(0, 1000));
        let resolver = DefaultPropertyResolver::new(InMemorySource::<String>::new("empty"));

        let mut builder = DefaultPropertyDescriptor::<String, i64>::builder();
        builder
            .set_key("timeout.ms".to_string())
            .set_value_type(TypeToken::of::<i64>())
            .set_default_value(5000)
            .set_value_filter(clamp);
        let descriptor = builder.build().unwrap();

        assert_eq!(resolver.resolve(&descriptor).unwrap(), Some(1000));
    }

    #[test]
    fn test_source_error_propagates() {
        let resolver = DefaultPropertyResolver::new(BrokenSource);

        let result: Result<Option<i64>> = resolver.resolve(&timeout_descriptor());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::SourceError { .. }
        ));
    }

    #[test]
    fn test_resolver_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DefaultPropertyResolver<String>>();
    }
}
