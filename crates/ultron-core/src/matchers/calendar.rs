//! Calendar event creation
//!
//! Fires on a scheduling verb next to an event noun ("create an event"),
//! or on a scheduling verb next to a date/time cue ("book lunch friday at
//! noon"). The `when` slot is the raw span from the first to the last date
//! cue; the title is whatever is left once verbs, calendar references and
//! date cues are cut away.

use once_cell::sync::Lazy;
use regex::Regex;

use super::MatchContext;
use crate::intent::{Intent, IntentResult};
use crate::slots;

static EVENT_VERB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:schedule|create|add|make|put|set(?: up)?|book|plan|remind me)\b").unwrap()
});

static EVENT_NOUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:event|meeting|appointment|reminder|calendar)s?\b").unwrap());

// Narrower verb set for the date-cue path: "make" and "put" are too common
static SCHEDULE_VERB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:schedule|book|add|plan|remind me)\b").unwrap());

const CLOCK_TIME: &str =
    r"\b\d{1,2}(?::\d{2})?\s*(?:am\b|pm\b|a\.m\.|p\.m\.)|\b\d{1,2}:\d{2}\b|\b(?:noon|midnight)\b";
const RELATIVE_DAY: &str = r"\b(?:day after tomorrow|today|tonight|tomorrow|this (?:morning|afternoon|evening|weekend)|next (?:week|month|weekend))\b";
const WEEKDAY: &str = r"\b(?:next |this )?(?:mon|tues|wednes|thurs|fri|satur|sun)day\b";
const MONTH_DATE: &str = r"\b(?:january|february|march|april|june|july|august|september|october|november|december)\b(?:\s+\d{1,2}(?:st|nd|rd|th)?\b)?|\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec)\.?\s+\d{1,2}(?:st|nd|rd|th)?\b|\b\d{1,2}(?:st|nd|rd|th)?\s+(?:of\s+)?(?:january|february|march|april|may|june|july|august|september|october|november|december)\b";

const DATE_CUE_PATTERNS: &[&str] = &[CLOCK_TIME, RELATIVE_DAY, WEEKDAY, MONTH_DATE];

static DATE_CUES: Lazy<Vec<Regex>> = Lazy::new(|| {
    DATE_CUE_PATTERNS
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).unwrap())
        .collect()
});

// Same cues with the preposition that introduces them, for title cleanup
static DATE_CUES_WITH_GLUE: Lazy<Vec<Regex>> = Lazy::new(|| {
    DATE_CUE_PATTERNS
        .iter()
        .map(|p| Regex::new(&format!(r"(?i)(?:\b(?:on|at|by|for|from|until)\s+)?(?:{p})")).unwrap())
        .collect()
});

static EXPLICIT_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:titled(?:\s+as)?|title|called|named|saying)\s*[:\-]?\s*(.+)$").unwrap()
});

static TRIGGER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:schedule|create|add|make|put|set(?: up)?|book|plan|remind me(?:\s+to|\s+about)?)\s+(?:(?:a|an)\s+)?(?:new\s+)?",
    )
    .unwrap()
});

static CALENDAR_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:to|on|in|into)\s+(?:my\s+|the\s+)?calendar\b").unwrap()
});

static LEADING_ARTICLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?:the|a|an)\s+").unwrap());

/// Leftover connective words trimmed from both ends of a title
const EDGE_GLUE: &[&str] = &[
    "on", "at", "by", "for", "from", "to", "this", "next", "and", "morning", "afternoon", "evening",
    "night",
];

const EVENT_NOUNS: &[&str] = &["event", "meeting", "appointment", "reminder"];

/// Does the text carry a clock time, relative day, weekday or month date?
pub fn has_date_cue(text: &str) -> bool {
    DATE_CUES.iter().any(|re| re.is_match(text))
}

pub fn detect(text: &str) -> bool {
    (EVENT_VERB.is_match(text) && EVENT_NOUN.is_match(text))
        || (SCHEDULE_VERB.is_match(text) && has_date_cue(text))
}

pub fn extract(_ctx: &MatchContext, text: &str) -> Option<IntentResult> {
    let title = event_title(text);
    let when = when_span(text);

    Some(
        IntentResult::with_optional_entity(Intent::CalendarCreate, title.clone())
            .slot("title", title)
            .slot("when", when),
    )
}

/// Raw text from the start of the first date cue to the end of the last
fn when_span(text: &str) -> Option<String> {
    let spans: Vec<(usize, usize)> = DATE_CUES
        .iter()
        .flat_map(|re| re.find_iter(text).map(|m| (m.start(), m.end())))
        .collect();

    let start = spans.iter().map(|(s, _)| *s).min()?;
    let end = spans.iter().map(|(_, e)| *e).max()?;

    let span = slots::trim_phrase(&text[start..end]);
    (!span.is_empty()).then_some(span)
}

fn event_title(text: &str) -> Option<String> {
    let source = match EXPLICIT_TITLE.captures(text) {
        Some(caps) => caps[1].to_string(),
        None => TRIGGER.replace_all(text, " ").into_owned(),
    };

    let mut cleaned = CALENDAR_REF.replace_all(&source, " ").into_owned();
    for cue in DATE_CUES_WITH_GLUE.iter() {
        cleaned = cue.replace_all(&cleaned, " ").into_owned();
    }

    let mut tokens: Vec<&str> = cleaned
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    // Strip connectives left dangling at either end
    while tokens.first().is_some_and(|t| is_glue(t)) {
        tokens.remove(0);
    }
    while tokens.last().is_some_and(|t| is_glue(t)) {
        tokens.pop();
    }

    let joined = tokens.join(" ");
    let title = slots::trim_phrase(&LEADING_ARTICLE.replace(&joined, ""));
    let title = title.trim_matches(|c: char| c == '-' || c.is_whitespace()).to_string();

    if title.is_empty() {
        return None;
    }

    // A lone noun ("event") becomes a presentable default title
    if EVENT_NOUNS.contains(&title.to_lowercase().as_str()) {
        return Some(capitalize(&title.to_lowercase()));
    }

    Some(title)
}

fn is_glue(token: &str) -> bool {
    EDGE_GLUE.contains(&token.to_lowercase().as_str())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> IntentResult {
        extract(&MatchContext::default(), text).unwrap()
    }

    #[test]
    fn test_detect_verb_and_noun() {
        assert!(detect("create an event"));
        assert!(detect("set up a meeting with the team"));
        assert!(!detect("open calendar"));
        assert!(!detect("show my meetings"));
    }

    #[test]
    fn test_detect_verb_and_date() {
        assert!(detect("book lunch with Sam friday at noon"));
        assert!(detect("remind me to call mom tomorrow at 6pm"));
        assert!(!detect("book a flight"));
    }

    #[test]
    fn test_meeting_with_time() {
        let result = parse("schedule a meeting with Sam tomorrow at 3pm");
        assert_eq!(result.intent, Intent::CalendarCreate);
        assert_eq!(result.entity.as_deref(), Some("meeting with Sam"));
        assert_eq!(result.get_slot("title"), Some("meeting with Sam"));
        assert_eq!(result.get_slot("when"), Some("tomorrow at 3pm"));
    }

    #[test]
    fn test_calendar_reference_removed() {
        let result = parse("add dentist appointment to my calendar on friday at 10am");
        assert_eq!(result.get_slot("title"), Some("dentist appointment"));
        assert_eq!(result.get_slot("when"), Some("friday at 10am"));
    }

    #[test]
    fn test_explicit_title() {
        let result = parse("create an event on Oct 18 at 7:30 pm titled as Trip");
        assert_eq!(result.get_slot("title"), Some("Trip"));
        assert_eq!(result.get_slot("when"), Some("Oct 18 at 7:30 pm"));
    }

    #[test]
    fn test_lone_noun_title() {
        let result = parse("create an event tomorrow at 5 pm");
        assert_eq!(result.get_slot("title"), Some("Event"));
    }

    #[test]
    fn test_missing_when() {
        let result = parse("create a new event");
        assert!(result.slots.contains_key("when"));
        assert_eq!(result.get_slot("when"), None);
        assert_eq!(result.get_slot("title"), Some("Event"));
    }

    #[test]
    fn test_set_verb() {
        assert!(detect("set a reminder for tomorrow at 5pm"));
        assert!(!detect("set volume to 40"));

        let result = parse("set a reminder for tomorrow at 5pm");
        assert_eq!(result.get_slot("title"), Some("Reminder"));
        assert_eq!(result.get_slot("when"), Some("tomorrow at 5pm"));

        let result = parse("set a meeting for friday at 3pm");
        assert_eq!(result.get_slot("title"), Some("Meeting"));
        assert_eq!(result.get_slot("when"), Some("friday at 3pm"));
    }

    #[test]
    fn test_remind_me() {
        let result = parse("remind me to call mom tomorrow at 6pm");
        assert_eq!(result.get_slot("title"), Some("call mom"));
        assert_eq!(result.get_slot("when"), Some("tomorrow at 6pm"));
    }

    #[test]
    fn test_date_cues() {
        assert!(has_date_cue("at 7:30"));
        assert!(has_date_cue("on March 3rd"));
        assert!(has_date_cue("the 5th of june"));
        assert!(has_date_cue("next tuesday"));
        assert!(!has_date_cue("may I ask something"));
        assert!(!has_date_cue("5 amazing things"));
    }
}
