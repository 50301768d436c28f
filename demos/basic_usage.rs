// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the property descriptor crate.
//!
//! This example demonstrates:
//! - Building an immutable property descriptor with the fluent builder
//! - Reusing one builder for a family of related descriptors
//! - Descriptor equality (values by value, behavior by shared identity)
//! - Build-time validation of required fields
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use propcfg::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== Property Descriptors: Basic Usage ===\n");

    // Example 1: Build a complete descriptor
    println!("--- Example 1: Building a Descriptor ---");
    let clamp: ValueFilter<i64> = Arc::new(|v: i64| v.clamp(100, 60_000));

    let mut builder = DefaultPropertyDescriptor::<String, i64>::builder();
    builder
        .set_key("timeout.ms".to_string())
        .set_value_type(TypeToken::of::<i64>())
        .set_default_value(5000)
        .add_value_converter(string_to_i64())
        .set_value_filter(clamp.clone());

    let timeout = builder.build()?;
    println!("✓ Built: {:?}", timeout);
    println!("  key           = {}", timeout.key());
    println!("  value type    = {}", timeout.value_type());
    println!("  default value = {:?}", timeout.default_value());
    println!("  chain length  = {}", timeout.value_converters().len());

    // Example 2: One builder, a family of descriptors
    println!("\n--- Example 2: Builder Reuse ---");
    let mut family = DefaultPropertyDescriptor::<String, i64>::builder();
    family
        .set_value_type(TypeToken::of::<i64>())
        .set_default_value(30_000)
        .add_value_converter(string_to_i64());

    family.set_key("connect.timeout.ms".to_string());
    let connect = family.build()?;
    family.set_key("read.timeout.ms".to_string());
    let read = family.build()?;

    println!("✓ {} and {} share defaults and chain", connect.key(), read.key());
    println!("  equal descriptors? {}", connect == read);

    // Example 3: Equality semantics
    println!("\n--- Example 3: Equality ---");
    let rebuilt = builder.build()?;
    println!("✓ Rebuild without mutation: equal? {}", timeout == rebuilt);

    builder.set_default_value(10_000);
    let changed = builder.build()?;
    println!("✓ After changing the default: equal? {}", timeout == changed);

    // Filters compare by identity, so a lookalike closure is a different filter.
    let mut lookalike = DefaultPropertyDescriptor::<String, i64>::builder();
    lookalike
        .set_key("timeout.ms".to_string())
        .set_value_type(TypeToken::of::<i64>())
        .set_default_value(5000)
        .add_value_converter(string_to_i64())
        .set_value_filter(Arc::new(|v: i64| v.clamp(100, 60_000)));
    println!(
        "✓ Same shape, fresh filter allocation: equal? {}",
        timeout == lookalike.build()?
    );

    // Example 4: Build-time validation
    println!("\n--- Example 4: Validation ---");
    let incomplete = DefaultPropertyDescriptor::<String, i64>::builder();
    match incomplete.build() {
        Ok(_) => println!("✗ unexpected success"),
        Err(e) => println!("✓ Empty builder rejected: {}", e),
    }

    println!("\n=== Done ===");
    Ok(())
}
