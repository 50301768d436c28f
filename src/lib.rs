// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture property descriptor crate.
//!
//! This crate provides immutable, self-describing property descriptors for
//! configuration systems: each descriptor carries a key, a declared value
//! type, an optional default, an ordered chain of value converters, and an
//! optional value filter. Descriptors are assembled through a reusable
//! builder, frozen at build time, and safe to share across threads.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and business logic (`PropertyDescriptor`,
//!   `DescriptorBuilder`, `TypeToken`, errors)
//! - **Ports**: Trait definitions that define interfaces (`ValueConverter`,
//!   `PropertySource`)
//! - **Adapters**: Implementations of the ports (closure-backed converters,
//!   an in-memory source)
//! - **Service**: The resolver that turns descriptors into effective values
//!
//! # Features
//!
//! - **Immutable Descriptors**: Frozen at build time, structurally
//!   independent of the builder that produced them
//! - **Reusable Builders**: One builder can stamp out a family of related
//!   descriptors
//! - **Typed Conversion Chains**: Ordered converters coerce raw source
//!   values toward the declared value type
//! - **Value Equality**: Descriptors compare by value, with behavior
//!   (converters, filters) compared by shared identity
//! - **Extensible**: New sources, converters, and descriptor kinds via trait
//!   implementation
//!
//! # Quick Start
//!
//! ```rust
//! use propcfg::prelude::*;
//!
//! # fn main() -> propcfg::domain::Result<()> {
//! // Describe the property: key, declared type, default, conversion chain.
//! let mut builder = DefaultPropertyDescriptor::<String, i64>::builder();
//! builder
//!     .set_key("timeout.ms".to_string())
//!     .set_value_type(TypeToken::of::<i64>())
//!     .set_default_value(5000)
//!     .add_value_converter(string_to_i64());
//! let descriptor = builder.build()?;
//!
//! // Resolve it against a source holding raw string values.
//! let source = InMemorySource::<String>::new("settings")
//!     .with_value("timeout.ms", "2500".to_string());
//! let resolver = DefaultPropertyResolver::new(source);
//!
//! assert_eq!(resolver.resolve(&descriptor)?, Some(2500));
//! # Ok(())
//! # }
//! ```
//!
//! # Examples
//!
//! Runnable walkthroughs live in the `demos/` directory; try
//! `cargo run --example basic_usage`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{
        string_to_bool, string_to_f64, string_to_i32, string_to_i64, FnConverter, InMemorySource,
    };
    pub use crate::domain::{
        converters_equal, filters_equal, ConfigError, DefaultDescriptorBuilder,
        DefaultPropertyDescriptor, DescriptorBuilder, PropertyDescriptor, PropertyResolver,
        Result, TypeToken, ValueFilter,
    };
    pub use crate::ports::{raw_value, PropertySource, RawValue, ValueConverter};
    pub use crate::service::DefaultPropertyResolver;
}
