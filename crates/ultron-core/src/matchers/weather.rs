//! Weather queries

use once_cell::sync::Lazy;
use regex::Regex;

use super::MatchContext;
use crate::intent::{Intent, IntentResult};
use crate::slots;

static WEATHER_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:weather|temperature|forecast)\b").unwrap());

static CONVERSATIONAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bhow(?:'s| is)\s+(?:the\s+|it\s+)?(?:weather|outside)\b|\btell me about the weather\b")
        .unwrap()
});

static CONDITIONS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:will|is|does|should)\b.*\b(?:rain|raining|snow|snowing|sunny|umbrella)\b").unwrap()
});

static WHEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(yesterday|tomorrow|right now|now|currently|at the moment|today|tonight)\b").unwrap()
});

// Time phrases that the city extractor may have swallowed
static TIME_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:yesterday|tomorrow|right now|now|currently|(?:at )?the moment|today|tonight|later|this (?:morning|afternoon|evening|weekend|week)|next week)\b",
    )
    .unwrap()
});

const CITY_EDGE_WORDS: &[&str] = &["in", "at", "for", "the", "like", "of"];

pub fn detect(text: &str) -> bool {
    WEATHER_WORD.is_match(text) || CONVERSATIONAL.is_match(text) || CONDITIONS.is_match(text)
}

pub fn extract(_ctx: &MatchContext, text: &str) -> Option<IntentResult> {
    Some(
        IntentResult::new(Intent::WeatherGet)
            .slot("city", city(text))
            .slot("when", Some(when(text).to_string())),
    )
}

/// yesterday, tomorrow, now or today
fn when(text: &str) -> &'static str {
    match WHEN.captures(text).map(|c| c[1].to_lowercase()) {
        Some(word) => match word.as_str() {
            "yesterday" => "yesterday",
            "tomorrow" => "tomorrow",
            "right now" | "now" | "currently" | "at the moment" => "now",
            _ => "today",
        },
        None => "today",
    }
}

fn city(text: &str) -> Option<String> {
    let raw = slots::city(text)?;
    let without_time = TIME_PHRASE.replace_all(&raw, " ");

    let mut tokens: Vec<&str> = without_time.split_whitespace().collect();
    while tokens.first().is_some_and(|t| is_edge_word(t)) {
        tokens.remove(0);
    }
    while tokens.last().is_some_and(|t| is_edge_word(t)) {
        tokens.pop();
    }

    let city = slots::trim_phrase(&tokens.join(" "));
    if city.is_empty() || city.starts_with(|c: char| c.is_ascii_digit()) || TIME_PHRASE.is_match(&city) {
        return None;
    }
    Some(city)
}

fn is_edge_word(token: &str) -> bool {
    CITY_EDGE_WORDS.contains(&token.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> IntentResult {
        extract(&MatchContext::default(), text).unwrap()
    }

    #[test]
    fn test_detect() {
        assert!(detect("what's the weather"));
        assert!(detect("how's it outside"));
        assert!(detect("will it rain tomorrow"));
        assert!(!detect("rain sounds playlist"));
    }

    #[test]
    fn test_city_and_when() {
        let result = parse("what's the weather in Hyderabad tomorrow");
        assert_eq!(result.intent, Intent::WeatherGet);
        assert_eq!(result.entity, None);
        assert_eq!(result.get_slot("city"), Some("Hyderabad"));
        assert_eq!(result.get_slot("when"), Some("tomorrow"));
    }

    #[test]
    fn test_defaults() {
        let result = parse("what's the weather");
        assert!(result.slots.contains_key("city"));
        assert_eq!(result.get_slot("city"), None);
        assert_eq!(result.get_slot("when"), Some("today"));
    }

    #[test]
    fn test_time_word_is_not_a_city() {
        assert_eq!(parse("weather for tomorrow").get_slot("city"), None);
        assert_eq!(parse("temperature at the moment").get_slot("city"), None);
        assert_eq!(parse("forecast for this weekend").get_slot("city"), None);
        assert_eq!(parse("weather for 10 days").get_slot("city"), None);
    }

    #[test]
    fn test_multiword_city() {
        let result = parse("what's the temperature in New York right now?");
        assert_eq!(result.get_slot("city"), Some("New York"));
        assert_eq!(result.get_slot("when"), Some("now"));
    }

    #[test]
    fn test_time_before_city() {
        let result = parse("what's the weather for tomorrow in Paris");
        assert_eq!(result.get_slot("city"), Some("Paris"));
        assert_eq!(result.get_slot("when"), Some("tomorrow"));
    }

    #[test]
    fn test_quoted_city() {
        assert_eq!(parse("weather in 'San Jose'").get_slot("city"), Some("San Jose"));
    }
}
