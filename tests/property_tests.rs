//! Property-based tests for datelog using proptest

use chrono::TimeZone;
use datelog::prelude::*;
use proptest::prelude::*;

fn any_call_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Info),
        Just(LogLevel::Debug),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

fn any_threshold() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Info),
        Just(LogLevel::Debug),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
        Just(LogLevel::All),
    ]
}

fn fixed_now() -> chrono::DateTime<chrono::Local> {
    chrono::Local
        .with_ymd_and_hms(2024, 3, 15, 9, 7, 2)
        .single()
        .expect("valid datetime")
}

// ============================================================================
// Admission ordering
// ============================================================================

proptest! {
    /// Admission is exactly the numeric comparison on the level values.
    #[test]
    fn test_admission_matches_numeric_order(
        call in any_call_level(),
        threshold in any_threshold(),
    ) {
        prop_assert_eq!(
            call.admitted_by(threshold),
            (call as u8) <= (threshold as u8)
        );
    }

    /// `All` as a threshold admits every call level.
    #[test]
    fn test_all_threshold_admits_all(call in any_call_level()) {
        prop_assert!(call.admitted_by(LogLevel::All));
    }

    /// Display matches to_str for every level.
    #[test]
    fn test_display_matches_to_str(level in any_threshold()) {
        prop_assert_eq!(format!("{}", level), level.to_str());
    }

    /// String conversion roundtrips for every level.
    #[test]
    fn test_level_str_roundtrip(level in any_threshold()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }
}

// ============================================================================
// Name-pattern parsing
// ============================================================================

proptest! {
    /// A pattern with an underscore keeps its first token as the prefix and
    /// names the file `<prefix>_<date>.log`.
    #[test]
    fn test_pattern_with_underscore_keeps_prefix(prefix in "[A-Za-z0-9]{1,12}") {
        let pattern = NamePattern::parse(&format!("{}_yyyyMMdd", prefix), &fixed_now());
        prop_assert_eq!(pattern.prefix(), prefix.as_str());
        prop_assert_eq!(pattern.date_component(), "20240315");
        prop_assert_eq!(
            pattern.file_name(),
            format!("{}_20240315.log", prefix)
        );
    }

    /// A pattern without an underscore always falls back to the `Log`
    /// prefix and an empty date component.
    #[test]
    fn test_pattern_without_underscore_falls_back(pattern in "[A-Za-z0-9]{1,16}") {
        let parsed = NamePattern::parse(&pattern, &fixed_now());
        prop_assert_eq!(parsed.prefix(), "Log");
        prop_assert_eq!(parsed.date_component(), "");
        prop_assert_eq!(parsed.file_name(), "Log_.log");
    }

    /// Tokens beyond the second never influence the file name.
    #[test]
    fn test_extra_tokens_ignored(extra in "[A-Za-z0-9_]{0,16}") {
        let base = NamePattern::parse("App_yyyy", &fixed_now());
        let extended = NamePattern::parse(&format!("App_yyyy_{}", extra), &fixed_now());
        prop_assert_eq!(base.file_name(), extended.file_name());
    }
}

// ============================================================================
// Record rendering
// ============================================================================

proptest! {
    /// Rendered records carry the message verbatim between the tab-dash
    /// separator and the line terminator.
    #[test]
    fn test_render_preserves_message(
        level in any_call_level(),
        message in "[^\r\n]{0,64}",
    ) {
        let record = LogRecord {
            level,
            timestamp: fixed_now(),
            message: message.clone(),
        };
        let line = record.render();
        let expected_tail = format!(" {}\t- {}", level.to_str(), message);
        let trimmed = line.trim_end_matches(['\r', '\n']);
        prop_assert!(trimmed.ends_with(&expected_tail), "line: {:?}", trimmed);
        prop_assert!(trimmed.starts_with("2024-03-15 09:07:02.000"));
    }
}
