//! Transcript normalization
//!
//! Cleans raw speech-to-text output before it reaches the matcher cascade:
//! folds Unicode "smart" punctuation to ASCII, collapses whitespace and
//! repairs a few known ASR mis-segmentations ("you tube" → "youtube",
//! "google dot com" → "google.com"). Case is preserved so that extracted
//! names ("Hyderabad", "OnePlus Buds Z2") survive intact; matchers compare
//! case-insensitively.

use once_cell::sync::Lazy;
use regex::Regex;

/// Unicode punctuation folded to its ASCII equivalent
const PUNCTUATION_FOLDS: &[(char, char)] = &[
    ('\u{2018}', '\''), // left single quote
    ('\u{2019}', '\''), // right single quote
    ('\u{201A}', '\''),
    ('\u{201B}', '\''),
    ('\u{201C}', '"'), // left double quote
    ('\u{201D}', '"'), // right double quote
    ('\u{201E}', '"'),
    ('\u{2013}', '-'), // en dash
    ('\u{2014}', '-'), // em dash
    ('\u{00A0}', ' '), // no-break space
];

/// Literal fixes for words the recognizer splits apart
static ASR_FIXES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"(?i)\byou\s+tube\b").unwrap(), "youtube"),
        (Regex::new(r"(?i)\bgit\s+hub\b").unwrap(), "github"),
        (Regex::new(r"(?i)\bface\s+book\b").unwrap(), "facebook"),
        (Regex::new(r"(?i)\bnet\s+flix\b").unwrap(), "netflix"),
        (Regex::new(r"(?i)\s+dot\s+(com|org|net|io|dev)\b").unwrap(), ".$1"),
        (Regex::new(r"(?i)\s+\.\s+(com|org|net)\b").unwrap(), ".$1"),
    ]
});

/// Canonicalize a raw utterance for matching.
///
/// Pure and total: never fails, empty input yields empty output.
pub fn normalize(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let folded: String = text
        .chars()
        .map(|c| {
            PUNCTUATION_FOLDS
                .iter()
                .find(|(from, _)| *from == c)
                .map(|(_, to)| *to)
                .unwrap_or(c)
        })
        .collect();

    let mut result = collapse_whitespace(&folded);

    for (pattern, replacement) in ASR_FIXES.iter() {
        result = pattern.replace_all(&result, *replacement).into_owned();
    }

    collapse_whitespace(&result)
}

/// Remove a leading wake phrase ("hey ultron", "ultron,") from normalized text.
///
/// An empty wake word disables stripping.
pub fn strip_wake_word(text: &str, wake_word: &str) -> String {
    let wake = wake_word.trim().to_lowercase();
    if wake.is_empty() {
        return text.to_string();
    }

    let mut rest = text;
    for greeting in ["hey ", "ok ", "okay "] {
        if let Some(after) = strip_prefix_ignore_case(rest, greeting) {
            if strip_prefix_ignore_case(after, &wake).is_some() {
                rest = after;
                break;
            }
        }
    }

    match strip_prefix_ignore_case(rest, &wake) {
        // Only strip whole words: "ultronic" stays as is
        Some(after) if after.is_empty() || after.starts_with(|c: char| !c.is_alphanumeric()) => after
            .trim_start_matches(|c: char| c == ',' || c == '.' || c == '!' || c.is_whitespace())
            .to_string(),
        _ => text.to_string(),
    }
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let len = prefix.len();
    if text.len() >= len && text.is_char_boundary(len) && text[..len].eq_ignore_ascii_case(prefix) {
        Some(&text[len..])
    } else {
        None
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t "), "");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(normalize("  open   the\tdoor  "), "open the door");
    }

    #[test]
    fn test_smart_quotes() {
        assert_eq!(
            normalize("switch audio to \u{201C}Living Room\u{201D}"),
            "switch audio to \"Living Room\""
        );
        assert_eq!(normalize("what\u{2019}s the weather"), "what's the weather");
    }

    #[test]
    fn test_dashes() {
        assert_eq!(normalize("turn Wi\u{2013}Fi off"), "turn Wi-Fi off");
        assert_eq!(normalize("a\u{2014}b"), "a-b");
    }

    #[test]
    fn test_you_tube() {
        assert_eq!(normalize("open You Tube"), "open youtube");
    }

    #[test]
    fn test_dot_com() {
        assert_eq!(normalize("go to google dot com"), "go to google.com");
        assert_eq!(normalize("go to example . org"), "go to example.org");
    }

    #[test]
    fn test_preserves_case() {
        assert_eq!(normalize("weather in Hyderabad"), "weather in Hyderabad");
    }

    #[test]
    fn test_no_false_positives() {
        // "dotcom" and "youth" must stay untouched
        assert_eq!(normalize("dotcom youth"), "dotcom youth");
        assert_eq!(
            normalize("put a dot in the middle of the screen"),
            "put a dot in the middle of the screen"
        );
        assert_eq!(normalize("what does the dot in the logo mean"), "what does the dot in the logo mean");
    }

    #[test]
    fn test_strip_wake_word() {
        assert_eq!(strip_wake_word("hey ultron open youtube", "ultron"), "open youtube");
        assert_eq!(strip_wake_word("Ultron, set volume to 20", "ultron"), "set volume to 20");
        assert_eq!(strip_wake_word("ultron", "ultron"), "");
    }

    #[test]
    fn test_strip_wake_word_whole_word_only() {
        assert_eq!(strip_wake_word("ultronic beats", "ultron"), "ultronic beats");
        assert_eq!(strip_wake_word("hey there", "ultron"), "hey there");
    }

    #[test]
    fn test_strip_wake_word_disabled() {
        assert_eq!(strip_wake_word("ultron open maps", ""), "ultron open maps");
    }
}
