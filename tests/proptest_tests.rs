// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests use property-based testing to verify that descriptor building
//! and value conversion handle arbitrary inputs correctly.

use propcfg::prelude::*;
use proptest::prelude::*;
use std::sync::Arc;

fn identity_converter() -> Arc<dyn ValueConverter> {
    Arc::new(FnConverter::<String, String>::new(|raw| Ok(raw.clone())))
}

// Test that a descriptor preserves any key the builder was given
proptest! {
    #[test]
    fn test_descriptor_preserves_any_key(key in "\\PC*") {
        let mut builder = DefaultPropertyDescriptor::<String, i64>::builder();
        builder
            .set_key(key.clone())
            .set_value_type(TypeToken::of::<i64>());

        let descriptor = builder.build().unwrap();
        prop_assert_eq!(descriptor.key(), &key);
    }
}

// Test that a descriptor preserves any default value
proptest! {
    #[test]
    fn test_descriptor_preserves_any_default(default in any::<i64>()) {
        let mut builder = DefaultPropertyDescriptor::<String, i64>::builder();
        builder
            .set_key("k".to_string())
            .set_value_type(TypeToken::of::<i64>())
            .set_default_value(default);

        let descriptor = builder.build().unwrap();
        prop_assert_eq!(descriptor.default_value(), Some(&default));
    }
}

// Test that building twice without mutation always yields equal descriptors
proptest! {
    #[test]
    fn test_rebuild_compares_equal(key in "\\PC*", default in any::<i64>()) {
        let mut builder = DefaultPropertyDescriptor::<String, i64>::builder();
        builder
            .set_key(key)
            .set_value_type(TypeToken::of::<i64>())
            .set_default_value(default)
            .add_value_converter(string_to_i64());

        prop_assert_eq!(builder.build().unwrap(), builder.build().unwrap());
    }
}

// Test that the frozen chain keeps the builder's converter count and order
proptest! {
    #[test]
    fn test_chain_preserves_length_and_order(len in 0usize..8) {
        let converters: Vec<_> = (0..len).map(|_| identity_converter()).collect();

        let mut builder = DefaultPropertyDescriptor::<String, String>::builder();
        builder
            .set_key("k".to_string())
            .set_value_type(TypeToken::of::<String>())
            .add_value_converters(converters.clone());

        let descriptor = builder.build().unwrap();
        prop_assert_eq!(descriptor.value_converters().len(), len);
        for (kept, given) in descriptor.value_converters().iter().zip(&converters) {
            prop_assert!(Arc::ptr_eq(kept, given));
        }
    }
}

// Test that a builder without a key never builds, whatever else is set
proptest! {
    #[test]
    fn test_missing_key_always_fails(default in any::<i64>()) {
        let mut builder = DefaultPropertyDescriptor::<String, i64>::builder();
        builder
            .set_value_type(TypeToken::of::<i64>())
            .set_default_value(default);

        let error = builder.build().unwrap_err();
        prop_assert!(
            matches!(error, ConfigError::InvalidArgument { name: "key" }),
            "unexpected error: {:?}",
            error
        );
    }
}

// Test that the stock i64 converter parses every rendered i64 back
proptest! {
    #[test]
    fn test_string_to_i64_parses_any_rendered_value(n in any::<i64>()) {
        let converted = string_to_i64()
            .convert(raw_value(n.to_string()))
            .unwrap();
        prop_assert_eq!(converted.downcast_ref::<i64>(), Some(&n));
    }
}

// Test that long alphabetic strings never sneak through the bool truth table
proptest! {
    #[test]
    fn test_string_to_bool_rejects_long_garbage(s in "[a-z]{8,16}") {
        let result = string_to_bool().convert(raw_value(s));
        prop_assert!(
            matches!(
                result.unwrap_err(),
                ConfigError::ConversionError { .. }
            ),
            "expected ConversionError"
        );
    }
}

// Test that resolution of an arbitrary stored number round-trips via the chain
proptest! {
    #[test]
    fn test_resolve_any_stored_number(n in any::<i64>()) {
        let source = InMemorySource::<String>::new("proptest")
            .with_value("n", n.to_string());
        let resolver = DefaultPropertyResolver::new(source);

        let mut builder = DefaultPropertyDescriptor::<String, i64>::builder();
        builder
            .set_key("n".to_string())
            .set_value_type(TypeToken::of::<i64>())
            .add_value_converter(string_to_i64());

        let resolved = resolver.resolve(&builder.build().unwrap()).unwrap();
        prop_assert_eq!(resolved, Some(n));
    }
}
