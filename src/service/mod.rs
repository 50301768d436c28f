// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the property resolver implementations.
//!
//! This module contains the concrete implementations of the `PropertyResolver`
//! trait, which turns property descriptors into effective values.

pub mod default_resolver;

// Re-export commonly used types
pub use default_resolver::DefaultPropertyResolver;
