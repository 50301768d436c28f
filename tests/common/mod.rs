// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helper utilities shared by the descriptor and resolver test suites.

use propcfg::prelude::*;
use std::sync::Arc;

/// Property source double whose lookups always fail.
#[derive(Debug)]
#[allow(dead_code)]
pub struct FailingSource;

impl PropertySource<String> for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    fn get(&self, _key: &String) -> Result<Option<RawValue>> {
        Err(ConfigError::source_error(
            "failing",
            "backing store unreachable",
        ))
    }
}

/// Creates a fresh identity converter over `String`.
///
/// Every call allocates a new instance, so two calls are never chain-equal.
#[allow(dead_code)]
pub fn identity_converter() -> Arc<dyn ValueConverter> {
    Arc::new(FnConverter::<String, String>::new(|raw| Ok(raw.clone())))
}

/// Creates a fresh filter clamping an `i64` into `0..=1000`.
///
/// Every call allocates a new instance; clone the returned `Arc` when two
/// descriptors are meant to compare equal.
#[allow(dead_code)]
pub fn clamp_filter() -> ValueFilter<i64> {
    Arc::new(|v: i64| v.clamp(0, 1000))
}

/// Builds the `timeout.ms` descriptor used across the suites.
///
/// Key `timeout.ms`, declared type `i64`, default `5000`, one stock
/// string-to-i64 converter, no filter.
#[allow(dead_code)]
pub fn timeout_descriptor() -> DefaultPropertyDescriptor<String, i64> {
    let mut builder = DefaultPropertyDescriptor::<String, i64>::builder();
    builder
        .set_key("timeout.ms".to_string())
        .set_value_type(TypeToken::of::<i64>())
        .set_default_value(5000)
        .add_value_converter(string_to_i64());
    builder.build().expect("timeout descriptor builds")
}
