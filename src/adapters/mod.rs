// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! This module contains concrete implementations of the traits defined in the
//! ports layer: closure-backed value converters with shared stock instances,
//! and a map-backed property source.

pub mod converters;
pub mod memory;

// Re-export commonly used types
pub use converters::{
    string_to_bool, string_to_f64, string_to_i32, string_to_i64, FnConverter,
};
pub use memory::InMemorySource;
