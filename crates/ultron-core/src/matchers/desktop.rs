//! Window management and screenshots

use once_cell::sync::Lazy;
use regex::Regex;

use super::MatchContext;
use crate::intent::{Intent, IntentResult};

static WINDOW_ACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(minimi[sz]e|maximi[sz]e|close)\b").unwrap());

// "close" alone is too broad; require something it acts on
static WINDOW_REFERENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:window|windows|this|that|current|it)\b").unwrap());

static SCREENSHOT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\bscreen\s?shot\b|\bscreen\s?(?:capture|grab)\b|\bcapture (?:the |my )?screen\b|\bprint screen\b|\bsnapshot of (?:the |my )?screen\b",
    )
    .unwrap()
});

pub fn detect_window(text: &str) -> bool {
    WINDOW_ACTION.is_match(text) && WINDOW_REFERENT.is_match(text)
}

pub fn extract_window(_ctx: &MatchContext, text: &str) -> Option<IntentResult> {
    let caps = WINDOW_ACTION.captures(text)?;
    let verb = caps[1].to_lowercase();

    let intent = if verb.starts_with("minimi") {
        Intent::WindowMinimize
    } else if verb.starts_with("maximi") {
        Intent::WindowMaximize
    } else {
        Intent::WindowClose
    };
    Some(IntentResult::new(intent))
}

pub fn detect_screenshot(text: &str) -> bool {
    SCREENSHOT.is_match(text)
}

pub fn extract_screenshot(_ctx: &MatchContext, _text: &str) -> Option<IntentResult> {
    Some(IntentResult::new(Intent::Screenshot))
}
