// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check that option reads and writes behave consistently for arbitrary keys,
//! values and map contents.

mod common;

use common::ParserOption;
use config_option::prelude::*;
use proptest::prelude::*;

/// A key-named option for properties over arbitrary keys.
struct Named(String);

impl ConfigOption for Named {
    fn key(&self) -> &str {
        &self.0
    }
}

fn scalar_value() -> impl Strategy<Value = ConfigValue> {
    prop_oneof![
        Just(ConfigValue::Null),
        any::<bool>().prop_map(ConfigValue::Bool),
        any::<i64>().prop_map(ConfigValue::Integer),
        prop::num::f64::NORMAL.prop_map(ConfigValue::Float),
        "\\PC*".prop_map(ConfigValue::String),
    ]
}

fn config_value() -> impl Strategy<Value = ConfigValue> {
    scalar_value().prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(ConfigValue::Sequence),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4).prop_map(ConfigValue::Mapping),
        ]
    })
}

fn config_map() -> impl Strategy<Value = ConfigMap> {
    prop::collection::hash_map("[a-z.]{1,8}", config_value(), 0..6)
}

// Test that contains_option reflects key presence regardless of the stored value
proptest! {
    #[test]
    fn test_contains_option_matches_presence(map in config_map(), key in "[a-z.]{1,8}") {
        let option = Named(key.clone());
        prop_assert_eq!(option.contains_option(&map), map.contains_key(&key));
    }
}

// Test that put makes the key present for any value, including null
proptest! {
    #[test]
    fn test_put_then_contains(mut map in config_map(), key in "[a-z.]{1,8}", value in config_value()) {
        let option = Named(key);
        option.put(&mut map, value);
        prop_assert!(option.contains_option(&map));
    }
}

// Test that reading back a value of the stored type returns it unchanged
proptest! {
    #[test]
    fn test_put_get_integer(mut map in config_map(), n in any::<i64>()) {
        ParserOption::BatchSize.put(&mut map, n);
        prop_assert_eq!(ParserOption::BatchSize.get::<i64>(&map).unwrap(), Some(n));
    }
}

proptest! {
    #[test]
    fn test_put_get_string(mut map in config_map(), s in "\\PC*") {
        ParserOption::Hosts.put(&mut map, s.clone());
        prop_assert_eq!(ParserOption::Hosts.get::<String>(&map).unwrap(), Some(s));
    }
}

proptest! {
    #[test]
    fn test_put_get_bool(mut map in config_map(), b in any::<bool>()) {
        ParserOption::Enabled.put(&mut map, b);
        prop_assert_eq!(ParserOption::Enabled.get::<bool>(&map).unwrap(), Some(b));
    }
}

proptest! {
    #[test]
    fn test_put_get_float(mut map in config_map(), n in prop::num::f64::NORMAL) {
        ParserOption::BatchSize.put(&mut map, n);
        prop_assert_eq!(ParserOption::BatchSize.get::<f64>(&map).unwrap(), Some(n));
    }
}

proptest! {
    #[test]
    fn test_put_get_value(mut map in config_map(), value in config_value()) {
        prop_assume!(!value.is_null());
        ParserOption::BatchSize.put(&mut map, value.clone());
        prop_assert_eq!(ParserOption::BatchSize.get::<ConfigValue>(&map).unwrap(), Some(value));
    }
}

// Test that absent keys always take the default
proptest! {
    #[test]
    fn test_absent_key_uses_default(mut map in config_map(), default in any::<i64>()) {
        map.remove(ParserOption::BatchSize.key());
        map.remove(ParserOption::TimeoutMillis.key());
        prop_assert_eq!(ParserOption::BatchSize.get_or_default(&map, default).unwrap(), default);
        prop_assert_eq!(
            ParserOption::BatchSize.get_transformed_or_default(&map, default).unwrap(),
            default
        );
        prop_assert_eq!(
            ParserOption::TimeoutMillis.get_transformed_or_default(&map, default).unwrap(),
            default
        );
    }
}

// Test that repeated reads without mutation agree
proptest! {
    #[test]
    fn test_reads_are_idempotent(map in config_map(), key in "[a-z.]{1,8}") {
        let option = Named(key);
        prop_assert_eq!(option.get::<i64>(&map).ok(), option.get::<i64>(&map).ok());
        prop_assert_eq!(option.get::<String>(&map).ok(), option.get::<String>(&map).ok());
        prop_assert_eq!(
            option.get_with::<Vec<String>, _>(&map, transforms::comma_separated).ok(),
            option.get_with::<Vec<String>, _>(&map, transforms::comma_separated).ok()
        );
    }
}

// Test that without a bound transform get_transformed reads exactly like get
proptest! {
    #[test]
    fn test_identity_transform_matches_get(map in config_map(), key in "[a-z.]{1,8}") {
        let option = Named(key);
        prop_assert_eq!(
            option.get_transformed::<i64>(&map).ok(),
            option.get::<i64>(&map).ok()
        );
        prop_assert_eq!(
            option.get_transformed::<ConfigValue>(&map).ok(),
            option.get::<ConfigValue>(&map).ok()
        );
    }
}

// Test that stringified integers always read back as integers
proptest! {
    #[test]
    fn test_stringified_integer_converts(n in any::<i32>()) {
        let mut map = ConfigMap::new();
        ParserOption::BatchSize.put(&mut map, n.to_string());
        prop_assert_eq!(ParserOption::BatchSize.get::<i32>(&map).unwrap(), Some(n));
    }
}

// Test that the comma-separated transform keeps item order
proptest! {
    #[test]
    fn test_comma_separated_preserves_order(items in prop::collection::vec("[a-z0-9]{1,6}", 1..8)) {
        let mut map = ConfigMap::new();
        ParserOption::Hosts.put(&mut map, items.join(","));
        let hosts: Vec<String> = ParserOption::Hosts.get_transformed_or_default(&map, Vec::new()).unwrap();
        prop_assert_eq!(hosts, items);
    }
}
