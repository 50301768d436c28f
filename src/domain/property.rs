// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property descriptor and builder types.
//!
//! This module contains the core of the crate: an immutable descriptor for a
//! single configuration property (key, declared value type, default value,
//! converter chain, value filter) and the builder that accumulates those
//! fields and freezes them into a descriptor.
//!
//! A builder is a plain mutable accumulator in the style of
//! [`std::process::Command`]: every mutator returns `&mut Self` for chaining,
//! and [`DescriptorBuilder::build`] borrows the builder instead of consuming
//! it, so one builder can produce a whole family of related descriptors.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::type_token::TypeToken;
use crate::ports::converter::ValueConverter;
use std::fmt;
use std::sync::Arc;

/// Type alias for value filter functions.
///
/// A filter post-processes a property's effective value, whether that value
/// came from the default or from the conversion chain. Filters are behavior,
/// not data: descriptor equality compares them by `Arc` identity, so callers
/// that want two descriptors to compare equal must hand both builders clones
/// of the same `Arc`.
pub type ValueFilter<V> = Arc<dyn Fn(V) -> V + Send + Sync>;

/// Read-only access to a finalized property definition.
///
/// This trait is the shape downstream consumers depend on: a value resolver
/// reads the default value and filter, a property-source reader consumes the
/// key and converter chain. Implementations are frozen snapshots: every
/// accessor is pure and the underlying data never changes after construction.
///
/// The crate ships [`DefaultPropertyDescriptor`]; descriptor variants
/// implement this trait themselves (and typically derive their equality from
/// [`converters_equal`] and [`filters_equal`]).
///
/// # Examples
///
/// ```rust
/// use propcfg::domain::property::{
///     DefaultPropertyDescriptor, DescriptorBuilder, PropertyDescriptor,
/// };
/// use propcfg::domain::type_token::TypeToken;
///
/// fn describe<D: PropertyDescriptor<String, i64>>(descriptor: &D) -> String {
///     format!("{} ({})", descriptor.key(), descriptor.value_type())
/// }
///
/// # fn main() -> propcfg::domain::Result<()> {
/// let mut builder = DefaultPropertyDescriptor::<String, i64>::builder();
/// builder
///     .set_key("timeout.ms".to_string())
///     .set_value_type(TypeToken::of::<i64>());
/// let descriptor = builder.build()?;
///
/// assert_eq!(describe(&descriptor), "timeout.ms (i64)");
/// # Ok(())
/// # }
/// ```
pub trait PropertyDescriptor<K, V> {
    /// Returns the unique identifier of this property.
    fn key(&self) -> &K;

    /// Returns the runtime witness of the declared value type.
    fn value_type(&self) -> TypeToken;

    /// Returns the value used when no source supplies one, if any.
    fn default_value(&self) -> Option<&V>;

    /// Returns the conversion chain, in application order.
    fn value_converters(&self) -> &[Arc<dyn ValueConverter>];

    /// Returns the post-resolution value filter, if any.
    fn value_filter(&self) -> Option<&ValueFilter<V>>;
}

/// Compares two converter chains element-wise by `Arc` identity.
///
/// Converters are behavior; two chains are equal when they have the same
/// length and each position holds the same shared converter instance. A
/// reordered chain is a different chain.
///
/// # Examples
///
/// ```rust
/// use propcfg::adapters::converters::string_to_i64;
/// use propcfg::domain::property::converters_equal;
///
/// let chain = vec![string_to_i64()];
/// assert!(converters_equal(&chain, &[string_to_i64()]));
/// assert!(!converters_equal(&chain, &[]));
/// ```
pub fn converters_equal(
    a: &[Arc<dyn ValueConverter>],
    b: &[Arc<dyn ValueConverter>],
) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| Arc::ptr_eq(x, y))
}

/// Compares two optional value filters by `Arc` identity.
///
/// Absent compares equal to absent; a present filter compares equal only to
/// the same shared instance, never structurally.
pub fn filters_equal<V>(a: Option<&ValueFilter<V>>, b: Option<&ValueFilter<V>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Default implementation of a property descriptor.
///
/// A frozen, structurally independent snapshot of the builder state that
/// produced it: the converter chain is copied into a read-only slice at build
/// time, so later mutation of the builder can never reach a descriptor that
/// has already been returned. Descriptors are cheap to clone (the chain and
/// filter are shared via `Arc`) and safe for unsynchronized concurrent reads.
///
/// Two descriptors are equal when their key, value type token, default value,
/// converter chain (element-wise identity), and filter (identity) all match.
/// Descriptors of different concrete kinds are never comparable: `PartialEq`
/// is only implemented between values of this type.
///
/// # Examples
///
/// ```rust
/// use propcfg::domain::property::{
///     DefaultPropertyDescriptor, DescriptorBuilder, PropertyDescriptor,
/// };
/// use propcfg::domain::type_token::TypeToken;
///
/// # fn main() -> propcfg::domain::Result<()> {
/// let mut builder = DefaultPropertyDescriptor::<String, i64>::builder();
/// builder
///     .set_key("timeout.ms".to_string())
///     .set_value_type(TypeToken::of::<i64>())
///     .set_default_value(5000);
/// let descriptor = builder.build()?;
///
/// assert_eq!(descriptor.key(), "timeout.ms");
/// assert_eq!(descriptor.default_value(), Some(&5000));
/// assert!(descriptor.value_converters().is_empty());
/// # Ok(())
/// # }
/// ```
pub struct DefaultPropertyDescriptor<K, V> {
    /// Unique identifier of the property
    key: K,
    /// Runtime witness of the declared value type
    value_type: TypeToken,
    /// Value used when no source supplies one
    default_value: Option<V>,
    /// Conversion chain, frozen in application order
    value_converters: Box<[Arc<dyn ValueConverter>]>,
    /// Post-resolution value filter
    value_filter: Option<ValueFilter<V>>,
}

impl<K, V> DefaultPropertyDescriptor<K, V> {
    /// Creates a new, empty builder for this descriptor kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use propcfg::domain::property::DefaultPropertyDescriptor;
    ///
    /// let builder = DefaultPropertyDescriptor::<String, bool>::builder();
    /// ```
    pub fn builder() -> DefaultDescriptorBuilder<K, V> {
        DefaultDescriptorBuilder::new()
    }
}

impl<K, V> PropertyDescriptor<K, V> for DefaultPropertyDescriptor<K, V> {
    fn key(&self) -> &K {
        &self.key
    }

    fn value_type(&self) -> TypeToken {
        self.value_type
    }

    fn default_value(&self) -> Option<&V> {
        self.default_value.as_ref()
    }

    fn value_converters(&self) -> &[Arc<dyn ValueConverter>] {
        &self.value_converters
    }

    fn value_filter(&self) -> Option<&ValueFilter<V>> {
        self.value_filter.as_ref()
    }
}

impl<K: Clone, V: Clone> Clone for DefaultPropertyDescriptor<K, V> {
    fn clone(&self) -> Self {
        DefaultPropertyDescriptor {
            key: self.key.clone(),
            value_type: self.value_type,
            default_value: self.default_value.clone(),
            value_converters: self.value_converters.clone(),
            value_filter: self.value_filter.clone(),
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for DefaultPropertyDescriptor<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.value_type == other.value_type
            && self.default_value == other.default_value
            && converters_equal(&self.value_converters, &other.value_converters)
            && filters_equal(self.value_filter.as_ref(), other.value_filter.as_ref())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for DefaultPropertyDescriptor<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Fixed field order: kind, key, value type, default, converters, filter.
        f.debug_struct("DefaultPropertyDescriptor")
            .field("key", &self.key)
            .field("value_type", &self.value_type)
            .field("default_value", &self.default_value)
            .field("value_converters", &self.value_converters)
            .field("value_filter", &self.value_filter.as_ref().map(|_| "<filter>"))
            .finish()
    }
}

/// Fluent accumulation of property descriptor fields.
///
/// Every mutator returns `&mut Self` so calls chain on one builder, and
/// [`DescriptorBuilder::build`] only borrows the builder, leaving it usable
/// for producing further descriptors. Validation happens exactly once, at
/// `build()`; setters accept whatever they are given.
///
/// Builders have no interior mutability; exclusive `&mut` access is the whole
/// concurrency story, enforced by the borrow checker.
pub trait DescriptorBuilder<K, V> {
    /// The descriptor kind this builder produces.
    type Descriptor: PropertyDescriptor<K, V>;

    /// Stores the property key, overwriting any previous key.
    ///
    /// Not validated until [`DescriptorBuilder::build`].
    fn set_key(&mut self, key: K) -> &mut Self;

    /// Stores the declared value type witness, overwriting any previous one.
    ///
    /// The builder does not check the token against `V` or against the
    /// default value; type coherence is the caller's responsibility.
    fn set_value_type(&mut self, value_type: TypeToken) -> &mut Self;

    /// Stores the default value, overwriting any previous one.
    fn set_default_value(&mut self, value: V) -> &mut Self;

    /// Appends one converter to the working conversion chain.
    ///
    /// Insertion order is the application order; each converter may depend on
    /// the output type of the previous one.
    fn add_value_converter(&mut self, converter: Arc<dyn ValueConverter>) -> &mut Self;

    /// Appends every converter in `converters`, in iteration order.
    ///
    /// Delegates to [`DescriptorBuilder::add_value_converter`] per element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use propcfg::adapters::converters::string_to_i64;
    /// use propcfg::domain::property::{DefaultPropertyDescriptor, DescriptorBuilder, PropertyDescriptor};
    /// use propcfg::domain::type_token::TypeToken;
    ///
    /// # fn main() -> propcfg::domain::Result<()> {
    /// let mut builder = DefaultPropertyDescriptor::<String, i64>::builder();
    /// builder
    ///     .set_key("retries".to_string())
    ///     .set_value_type(TypeToken::of::<i64>())
    ///     .add_value_converters(vec![string_to_i64()]);
    /// assert_eq!(builder.build()?.value_converters().len(), 1);
    /// # Ok(())
    /// # }
    /// ```
    fn add_value_converters<I>(&mut self, converters: I) -> &mut Self
    where
        I: IntoIterator<Item = Arc<dyn ValueConverter>>,
        Self: Sized,
    {
        for converter in converters {
            self.add_value_converter(converter);
        }
        self
    }

    /// Stores the value filter, overwriting any previous one.
    ///
    /// Never calling this setter is the legal "no filter" state. The filter
    /// participates in descriptor equality by `Arc` identity, so pass clones
    /// of one shared `Arc` to builders whose descriptors should compare
    /// equal.
    fn set_value_filter(&mut self, filter: ValueFilter<V>) -> &mut Self;

    /// Validates the accumulated state and returns a new frozen descriptor.
    ///
    /// # Returns
    ///
    /// * `Ok(descriptor)` - A structurally independent snapshot of the
    ///   current builder state
    /// * `Err(ConfigError::InvalidArgument)` - `key` or `value_type` was
    ///   never set; the error names the missing field
    ///
    /// Building twice without intervening mutation yields two descriptors
    /// that are distinct objects but compare equal; mutating and building
    /// again yields a different descriptor.
    fn build(&self) -> Result<Self::Descriptor>;
}

/// Default builder for [`DefaultPropertyDescriptor`].
///
/// # Examples
///
/// One builder can stamp out a family of related descriptors:
///
/// ```rust
/// use propcfg::domain::property::{DefaultDescriptorBuilder, DescriptorBuilder, PropertyDescriptor};
/// use propcfg::domain::type_token::TypeToken;
///
/// # fn main() -> propcfg::domain::Result<()> {
/// let mut builder = DefaultDescriptorBuilder::<String, i64>::new();
/// builder
///     .set_value_type(TypeToken::of::<i64>())
///     .set_default_value(30_000);
///
/// builder.set_key("connect.timeout.ms".to_string());
/// let connect = builder.build()?;
///
/// builder.set_key("read.timeout.ms".to_string());
/// let read = builder.build()?;
///
/// assert_ne!(connect, read);
/// assert_eq!(connect.default_value(), read.default_value());
/// # Ok(())
/// # }
/// ```
pub struct DefaultDescriptorBuilder<K, V> {
    /// Property key, validated at build time
    key: Option<K>,
    /// Declared value type witness, validated at build time
    value_type: Option<TypeToken>,
    /// Optional default value
    default_value: Option<V>,
    /// Working conversion chain; does not allocate until the first append
    value_converters: Vec<Arc<dyn ValueConverter>>,
    /// Optional value filter
    value_filter: Option<ValueFilter<V>>,
}

impl<K, V> DefaultDescriptorBuilder<K, V> {
    /// Creates a new, empty builder.
    pub fn new() -> Self {
        DefaultDescriptorBuilder {
            key: None,
            value_type: None,
            default_value: None,
            value_converters: Vec::new(),
            value_filter: None,
        }
    }
}

impl<K, V> Default for DefaultDescriptorBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> DescriptorBuilder<K, V> for DefaultDescriptorBuilder<K, V> {
    type Descriptor = DefaultPropertyDescriptor<K, V>;

    fn set_key(&mut self, key: K) -> &mut Self {
        self.key = Some(key);
        self
    }

    fn set_value_type(&mut self, value_type: TypeToken) -> &mut Self {
        self.value_type = Some(value_type);
        self
    }

    fn set_default_value(&mut self, value: V) -> &mut Self {
        self.default_value = Some(value);
        self
    }

    fn add_value_converter(&mut self, converter: Arc<dyn ValueConverter>) -> &mut Self {
        self.value_converters.push(converter);
        self
    }

    fn set_value_filter(&mut self, filter: ValueFilter<V>) -> &mut Self {
        self.value_filter = Some(filter);
        self
    }

    fn build(&self) -> Result<DefaultPropertyDescriptor<K, V>> {
        let key = self
            .key
            .clone()
            .ok_or(ConfigError::InvalidArgument { name: "key" })?;
        let value_type = self
            .value_type
            .ok_or(ConfigError::InvalidArgument { name: "value_type" })?;

        // A fresh copy of the chain: the builder's working Vec stays free to
        // grow without touching descriptors that have already been returned.
        Ok(DefaultPropertyDescriptor {
            key,
            value_type,
            default_value: self.default_value.clone(),
            value_converters: self.value_converters.clone().into_boxed_slice(),
            value_filter: self.value_filter.clone(),
        })
    }
}
