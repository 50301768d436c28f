// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value resolution example for the property descriptor crate.
//!
//! This example demonstrates:
//! - Resolving descriptors against an in-memory property source
//! - Conversion chains coercing raw strings to typed values
//! - Default fallback for absent or unconvertible values
//! - Filters post-processing the effective value
//!
//! To run this example:
//! ```bash
//! cargo run --example value_resolution
//! ```

use propcfg::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== Property Descriptors: Value Resolution ===\n");

    // A source holding raw string values, as a file or environment would.
    let source = InMemorySource::<String>::new("settings")
        .with_value("timeout.ms", "2500".to_string())
        .with_value("feature.enabled", "yes".to_string())
        .with_value("sampling.rate", "not-a-number".to_string());
    let resolver = DefaultPropertyResolver::new(source);

    // Example 1: A raw string converted to the declared type
    println!("--- Example 1: Conversion ---");
    let mut builder = DefaultPropertyDescriptor::<String, i64>::builder();
    builder
        .set_key("timeout.ms".to_string())
        .set_value_type(TypeToken::of::<i64>())
        .set_default_value(5000)
        .add_value_converter(string_to_i64());
    let timeout = builder.build()?;

    println!("✓ timeout.ms resolved to {:?}", resolver.resolve(&timeout)?);

    // Example 2: Boolean flags through the truth table
    println!("\n--- Example 2: Boolean Flags ---");
    let mut flag = DefaultPropertyDescriptor::<String, bool>::builder();
    flag.set_key("feature.enabled".to_string())
        .set_value_type(TypeToken::of::<bool>())
        .set_default_value(false)
        .add_value_converter(string_to_bool());

    println!(
        "✓ feature.enabled (\"yes\") resolved to {:?}",
        resolver.resolve(&flag.build()?)?
    );

    // Example 3: Default fallback
    println!("\n--- Example 3: Defaults ---");
    let mut retries = DefaultPropertyDescriptor::<String, i64>::builder();
    retries
        .set_key("retries".to_string())
        .set_value_type(TypeToken::of::<i64>())
        .set_default_value(3)
        .add_value_converter(string_to_i64());

    println!(
        "✓ retries is absent, resolved to {:?}",
        resolver.resolve(&retries.build()?)?
    );

    let mut rate = DefaultPropertyDescriptor::<String, f64>::builder();
    rate.set_key("sampling.rate".to_string())
        .set_value_type(TypeToken::of::<f64>())
        .set_default_value(0.1)
        .add_value_converter(string_to_f64());

    println!(
        "✓ sampling.rate is unparsable, resolved to {:?}",
        resolver.resolve(&rate.build()?)?
    );

    // Example 4: Filters run last, on whichever value won
    println!("\n--- Example 4: Filters ---");
    let mut clamped = DefaultPropertyDescriptor::<String, i64>::builder();
    clamped
        .set_key("timeout.ms".to_string())
        .set_value_type(TypeToken::of::<i64>())
        .set_default_value(5000)
        .add_value_converter(string_to_i64())
        .set_value_filter(Arc::new(|v: i64| v.clamp(100, 2000)));

    println!(
        "✓ timeout.ms (2500) clamped to {:?}",
        resolver.resolve(&clamped.build()?)?
    );

    println!("\n=== Done ===");
    Ok(())
}
