//! Property-based tests for rust_dual_logger using proptest

mod common;

use common::SharedBuffer;
use proptest::prelude::*;
use rust_dual_logger::prelude::*;

fn named_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::DEBUG),
        Just(Level::INFO),
        Just(Level::WARN),
        Just(Level::ERROR),
    ]
}

fn attr_strategy() -> impl Strategy<Value = Attr> {
    ("[a-z]{1,8}", any::<i64>()).prop_map(|(key, value)| Attr::int64(key, value))
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Every level prints to a string that parses back to the same level
    #[test]
    fn test_level_str_roundtrip(rank in any::<i32>()) {
        let level = Level(rank);
        let parsed: Level = level.to_string().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Parsing ignores case for the named levels
    #[test]
    fn test_level_parse_case_insensitive(level in named_level()) {
        let lower = level.to_string().to_lowercase();
        prop_assert_eq!(lower.parse::<Level>().unwrap(), level);
    }

    /// Level ordering matches integer rank ordering
    #[test]
    fn test_level_ordering(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(Level(a) <= Level(b), a <= b);
        prop_assert_eq!(Level(a).cmp(&Level(b)), a.cmp(&b));
    }
}

// ============================================================================
// Dispatch Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A record reaches the sink exactly when its level is at or above the threshold
    #[test]
    fn test_threshold_filtering(severity in -16i32..16, threshold in -16i32..16) {
        let buffer = SharedBuffer::new();
        let registry = Registry::builder()
            .level(Level(threshold))
            .json(buffer.clone(), false)
            .build();

        registry.logf(Level(severity), format_args!("probe"));

        prop_assert_eq!(!buffer.is_empty(), severity >= threshold);
        prop_assert_eq!(registry.enabled(Level(severity)), severity >= threshold);
    }

    /// Chained derivation binds attributes in the same order as a single call
    #[test]
    fn test_with_composition(
        first in prop::collection::vec(attr_strategy(), 0..4),
        second in prop::collection::vec(attr_strategy(), 0..4),
    ) {
        let buffer = SharedBuffer::new();
        let registry = Registry::builder().text(buffer.clone(), false).build();
        let logger = registry.default_logger();

        let combined: Vec<Attr> = first.iter().chain(second.iter()).cloned().collect();
        logger.with(&first).with(&second).info("m", &[]);
        logger.with(&combined).info("m", &[]);

        let lines = buffer.lines();
        prop_assert_eq!(lines.len(), 2);
        let tail = |line: &str| line.split_once(" msg=m").map(|(_, rest)| rest.to_string());
        prop_assert_eq!(tail(&lines[0]), tail(&lines[1]));
    }

    /// Text values survive quoting when they need it
    #[test]
    fn test_text_quoting_keeps_single_line(value in "\\PC*") {
        let buffer = SharedBuffer::new();
        let registry = Registry::builder().text(buffer.clone(), false).build();

        registry.info("quoted", &[Attr::string("v", value.as_str())]);

        prop_assert_eq!(buffer.lines().len(), 1);
    }

    /// JSON output is always a single parseable object
    #[test]
    fn test_json_always_parses(msg in ".*", value in "\\PC*", group in "[a-z]{0,4}") {
        let buffer = SharedBuffer::new();
        let registry = Registry::builder().json(buffer.clone(), true).build();

        registry
            .default_logger()
            .with_group(&group)
            .info(msg.clone(), &[Attr::string("v", value.as_str())]);

        let records = buffer.json_lines();
        prop_assert_eq!(records.len(), 1);
        prop_assert_eq!(records[0]["msg"].as_str(), Some(msg.as_str()));
    }
}
