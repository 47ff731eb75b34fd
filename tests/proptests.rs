// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Property-Based Tests: category filtering and hex encoding
//!
//! These use `proptest` to generate category paths and byte buffers and
//! check properties that must hold for every input rather than specific
//! outputs.

use catlog::logging::{encode_hex, CategoryFilter, LogLevel};
use proptest::prelude::*;

fn level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Panic),
        Just(LogLevel::None),
    ]
}

fn category() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,6}", 1..5).prop_map(|segments| segments.join("."))
}

proptest! {
    /// **Property:** A configured category governs every descendant that has
    /// no threshold of its own.
    #[test]
    fn test_descendants_inherit_threshold(
        parent in category(),
        child in prop::collection::vec("[a-z]{1,6}", 1..4),
        default_level in level(),
        parent_level in level(),
    ) {
        let filter = CategoryFilter::with_categories(default_level, [(parent.clone(), parent_level)]);
        let descendant = format!("{}.{}", parent, child.join("."));
        prop_assert_eq!(filter.threshold(&descendant), parent_level);
    }

    /// **Property:** `enabled` is monotonic in the level: if a level passes,
    /// every more severe level (other than `None`) passes too.
    #[test]
    fn test_enabled_is_monotonic(cat in category(), threshold in level(), a in level(), b in level()) {
        let filter = CategoryFilter::new(threshold);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        if filter.enabled(low, &cat) && high != LogLevel::None {
            prop_assert!(filter.enabled(high, &cat));
        }
        prop_assert!(!filter.enabled(LogLevel::None, &cat));
    }

    /// **Property:** Hex output is two lower-case digits per input byte.
    #[test]
    fn test_hex_shape(data in any::<Vec<u8>>()) {
        let hex = encode_hex(&data);
        prop_assert_eq!(hex.len(), data.len() * 2);
        prop_assert!(hex.bytes().all(|c| c.is_ascii_digit() || (b'a'..=b'f').contains(&c)));
    }
}
