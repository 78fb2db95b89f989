use super::LogFormatter;
use crate::log::LogLevel;

#[test]
fn formats_level_without_timestamp() {
    let formatter = LogFormatter::new(false, true);
    assert_eq!(formatter.format(Some(LogLevel::Warning), "careful"), "[WARN] careful");
    assert_eq!(formatter.format(None, "plain"), "plain");
}

#[test]
fn timestamp_prefix_precedes_message() {
    let formatted = LogFormatter::new(true, false).format(Some(LogLevel::Info), "hello");
    assert!(formatted.ends_with(" hello"));
    assert!(!formatted.contains("[INFO]"));
    assert_eq!(LogFormatter::new(false, false).format(Some(LogLevel::Info), "hello"), "hello");
}
