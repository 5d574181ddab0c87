//! Shared slot extractors
//!
//! Small, total functions reused by several matcher families. Each returns
//! `None` when nothing usable is present; none of them fail.

use once_cell::sync::Lazy;
use regex::Regex;

static DOUBLE_QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]+)""#).unwrap());

// Single quotes only count at word edges so "what's" is not an opening quote
static SINGLE_QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)'([^']+)'(?:$|[\s.,!?;:])").unwrap());

static AFTER_PREPOSITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:onto|into|to|as|on|at)\s+(.+)$").unwrap());

static CITY_TAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(?:in|at|for)\s+(.+)$").unwrap());

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Characters trimmed off the end of extracted phrases
pub const TRAILING_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// First run of text inside double or single quotes, trimmed.
pub fn quoted_text(text: &str) -> Option<String> {
    let double = DOUBLE_QUOTED
        .captures(text)
        .and_then(|c| c.get(1));
    let single = SINGLE_QUOTED
        .captures(text)
        .and_then(|c| c.get(1));

    let first = match (double, single) {
        (Some(d), Some(s)) => {
            if d.start() <= s.start() {
                d
            } else {
                s
            }
        }
        (Some(d), None) => d,
        (None, Some(s)) => s,
        (None, None) => return None,
    };

    let inner = first.as_str().trim();
    if inner.is_empty() {
        None
    } else {
        Some(inner.to_string())
    }
}

/// The text with its first quoted run (quotes included) removed
pub fn without_quoted(text: &str) -> String {
    let stripped = DOUBLE_QUOTED.replace(text, " ");
    let stripped = if stripped.len() == text.len() {
        SINGLE_QUOTED.replace(text, " ")
    } else {
        stripped
    };
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tail following the first of to/into/as/on/onto/at
pub fn after_preposition(text: &str) -> Option<String> {
    AFTER_PREPOSITION
        .captures(text)
        .map(|c| trim_phrase(&c[1]))
        .filter(|s| !s.is_empty())
}

/// First small non-negative integer in the text, clamped to 0..=100.
///
/// Digit runs longer than three digits are skipped, as are runs directly
/// preceded by a minus sign.
pub fn bounded_int(text: &str) -> Option<u8> {
    DIGIT_RUN.find_iter(text).find_map(|m| {
        if text[..m.start()].ends_with('-') || m.as_str().len() > 3 {
            return None;
        }
        m.as_str().parse::<u16>().ok().map(|n| n.min(100) as u8)
    })
}

/// City phrase: quoted text first, else the tail after in/at/for
pub fn city(text: &str) -> Option<String> {
    if let Some(quoted) = quoted_text(text) {
        return Some(quoted);
    }
    CITY_TAIL
        .captures(text)
        .map(|c| trim_phrase(&c[1]))
        .filter(|s| !s.is_empty())
}

/// Trim whitespace and trailing punctuation from an extracted phrase
pub fn trim_phrase(phrase: &str) -> String {
    phrase
        .trim()
        .trim_end_matches(TRAILING_PUNCTUATION)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_text() {
        assert_eq!(quoted_text(r#"switch to "Living Room TV""#), Some("Living Room TV".to_string()));
        assert_eq!(quoted_text("weather in 'New York'"), Some("New York".to_string()));
        assert_eq!(quoted_text("no quotes here"), None);
        assert_eq!(quoted_text(r#"empty """#), None);
    }

    #[test]
    fn test_apostrophes_are_not_quotes() {
        assert_eq!(quoted_text("what's the weather in 'Pune'"), Some("Pune".to_string()));
        assert_eq!(quoted_text("what's up, isn't it"), None);
    }

    #[test]
    fn test_without_quoted() {
        assert_eq!(without_quoted(r#"search "rust traits" on youtube"#), "search on youtube");
        assert_eq!(without_quoted("nothing quoted"), "nothing quoted");
    }

    #[test]
    fn test_after_preposition() {
        assert_eq!(after_preposition("set it to max."), Some("max".to_string()));
        assert_eq!(after_preposition("nothing here"), None);
    }

    #[test]
    fn test_bounded_int() {
        assert_eq!(bounded_int("set volume to 70"), Some(70));
        assert_eq!(bounded_int("set volume to 150"), Some(100));
        assert_eq!(bounded_int("set volume to 0"), Some(0));
        assert_eq!(bounded_int("no number"), None);
    }

    #[test]
    fn test_bounded_int_skips_negative_and_long_runs() {
        assert_eq!(bounded_int("set volume to -5"), None);
        assert_eq!(bounded_int("year 2024 then 30"), Some(30));
    }

    #[test]
    fn test_city() {
        assert_eq!(city("weather in Hyderabad tomorrow?"), Some("Hyderabad tomorrow".to_string()));
        assert_eq!(city("temperature for 'San Jose'"), Some("San Jose".to_string()));
        assert_eq!(city("what's the weather"), None);
    }
}
