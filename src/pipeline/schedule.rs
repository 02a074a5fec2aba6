//! Dosing-schedule extraction.
//!
//! A fixed ordered table of frequency phrasings, each mapping to
//! time-of-day slots or meal-relation tags. Every matching pattern
//! contributes its slots; the union is the suggested schedule. A text
//! with no frequency cue yields the "Not specified" singleton.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Sentinel schedule entry when no frequency cue matched.
pub const NOT_SPECIFIED: &str = "Not specified";

/// A frequency phrasing and the slots it implies.
struct FrequencyPattern {
    regex: Regex,
    slots: &'static [&'static str],
}

static FREQUENCY_PATTERNS: LazyLock<Vec<FrequencyPattern>> = LazyLock::new(|| {
    vec![
        pattern(r"(?i)\bonce (?:daily|a day)\b", &["Morning"]),
        pattern(r"(?i)\btwice (?:daily|a day)\b", &["Morning", "Evening"]),
        pattern(r"(?i)\bthrice (?:daily|a day)\b", &["Morning", "Afternoon", "Night"]),
        pattern(r"(?i)\bevery 8 hours\b", &["Morning", "Afternoon", "Night"]),
        pattern(r"(?i)\bevery 12 hours\b", &["Morning", "Night"]),
        pattern(r"(?i)\bat night\b", &["Night"]),
        pattern(r"(?i)\bin morning\b", &["Morning"]),
        pattern(r"(?i)\bin evening\b", &["Evening"]),
        pattern(r"(?i)\bafter (?:food|meals?)\b", &["After meals"]),
        pattern(r"(?i)\bbefore (?:food|meals?)\b", &["Before meals"]),
    ]
});

fn pattern(regex_str: &str, slots: &'static [&'static str]) -> FrequencyPattern {
    FrequencyPattern {
        regex: Regex::new(regex_str).expect("Invalid frequency pattern"),
        slots,
    }
}

/// Extract the dosing schedule from free text. Pure and idempotent;
/// independent of the entity provider.
pub fn extract_schedule(text: &str) -> BTreeSet<String> {
    let mut schedule = BTreeSet::new();
    for fp in FREQUENCY_PATTERNS.iter() {
        if fp.regex.is_match(text) {
            schedule.extend(fp.slots.iter().map(|s| s.to_string()));
        }
    }
    if schedule.is_empty() {
        schedule.insert(NOT_SPECIFIED.to_string());
    }
    schedule
}
