// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the core domain types and logic for the property
//! descriptor crate. It is independent of any external concerns and defines
//! the fundamental concepts used throughout the library.

pub mod errors;
pub mod property;
pub mod resolver;
pub mod type_token;

// Re-export commonly used types
pub use errors::{ConfigError, Result};
pub use property::{
    converters_equal, filters_equal, DefaultDescriptorBuilder, DefaultPropertyDescriptor,
    DescriptorBuilder, PropertyDescriptor, ValueFilter,
};
pub use resolver::PropertyResolver;
pub use type_token::TypeToken;
