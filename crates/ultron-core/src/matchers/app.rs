//! Application and generic "open X" matching

use once_cell::sync::Lazy;
use regex::Regex;

use super::{web, MatchContext};
use crate::aliases::{self, SiteTarget, APP_ALIASES};
use crate::intent::{Intent, IntentResult};
use crate::slots;

// Longest triggers first so "open up" wins over "open"
static OPEN_COMMAND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:please open|can you open|could you open|open up|navigate to|go to|open|launch|start|visit)\s+(.+)$",
    )
    .unwrap()
});

static LEADING_ARTICLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?:the|a|an)\s+").unwrap());

/// Words that never name a target on their own
const OPEN_FILLERS: &[&str] = &[
    "the",
    "a",
    "an",
    "my",
    "please",
    "website",
    "site",
    "page",
    "app",
    "application",
];

pub fn is_bare_app(text: &str) -> bool {
    APP_ALIASES.exact(&bare(text)).is_some()
}

pub fn extract_bare_app(_ctx: &MatchContext, text: &str) -> Option<IntentResult> {
    APP_ALIASES
        .exact(&bare(text))
        .map(|app| IntentResult::with_entity(Intent::OpenApp, app))
}

fn bare(text: &str) -> String {
    slots::trim_phrase(text).to_lowercase()
}

pub fn is_open_command(text: &str) -> bool {
    OPEN_COMMAND.is_match(text)
}

/// Resolve the object of an open/launch verb.
///
/// Tried in order: browser/app alias, site alias (whole phrase, first two
/// words, first word), embedded domain, raw object.
pub fn extract_open_command(ctx: &MatchContext, text: &str) -> Option<IntentResult> {
    let caps = OPEN_COMMAND.captures(text)?;

    let object = slots::quoted_text(text).unwrap_or_else(|| caps[1].to_string());
    let object = slots::trim_phrase(&object);
    let object = LEADING_ARTICLE.replace(&object, "").trim().to_lowercase();

    if object.is_empty() {
        return Some(IntentResult::new(Intent::OpenSite));
    }

    if let Some(app) = aliases::lookup_app(&object, ctx.alias_cutoff) {
        return Some(IntentResult::with_entity(Intent::OpenApp, app));
    }

    let cleaned = remove_fillers(&object);
    if cleaned.is_empty() {
        return Some(IntentResult::new(Intent::OpenSite));
    }

    for candidate in site_candidates(&cleaned) {
        match aliases::lookup_site(&candidate, ctx.alias_cutoff) {
            Some(SiteTarget::Domain(domain)) => {
                return Some(IntentResult::with_entity(Intent::OpenSite, domain));
            }
            Some(SiteTarget::PreferApp(app)) => {
                return Some(IntentResult::with_entity(Intent::OpenApp, app));
            }
            None => {}
        }
    }

    if let Some(site) = web::find_site(ctx, &cleaned) {
        return Some(IntentResult::with_entity(Intent::OpenSite, site));
    }

    Some(IntentResult::with_entity(Intent::OpenSite, cleaned))
}

fn remove_fillers(object: &str) -> String {
    object
        .split_whitespace()
        .filter(|token| !OPEN_FILLERS.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whole phrase, then the first two words, then the first word
fn site_candidates(cleaned: &str) -> Vec<String> {
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    let mut candidates = vec![cleaned.to_string()];

    if tokens.len() > 2 {
        candidates.push(tokens[..2].join(" "));
    }
    if tokens.len() > 1 {
        candidates.push(tokens[0].to_string());
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(text: &str) -> Option<IntentResult> {
        extract_open_command(&MatchContext::default(), text)
    }

    #[test]
    fn test_bare_app() {
        assert!(is_bare_app("chrome"));
        assert!(is_bare_app("Google Chrome."));
        assert!(!is_bare_app("open chrome"));
        assert_eq!(
            extract_bare_app(&MatchContext::default(), "Edge"),
            Some(IntentResult::with_entity(Intent::OpenApp, "edge"))
        );
    }

    #[test]
    fn test_open_site_alias() {
        assert_eq!(open("open youtube"), Some(IntentResult::with_entity(Intent::OpenSite, "youtube.com")));
        assert_eq!(
            open("please open the reddit website"),
            Some(IntentResult::with_entity(Intent::OpenSite, "reddit.com"))
        );
    }

    #[test]
    fn test_open_app_alias() {
        assert_eq!(open("launch vs code"), Some(IntentResult::with_entity(Intent::OpenApp, "vscode")));
        assert_eq!(open("open firefox"), Some(IntentResult::with_entity(Intent::OpenApp, "firefox")));
    }

    #[test]
    fn test_prefer_app_site() {
        assert_eq!(open("open whatsapp"), Some(IntentResult::with_entity(Intent::OpenApp, "whatsapp")));
    }

    #[test]
    fn test_first_words_fallback() {
        assert_eq!(
            open("open youtube and play music"),
            Some(IntentResult::with_entity(Intent::OpenSite, "youtube.com"))
        );
    }

    #[test]
    fn test_raw_object() {
        assert_eq!(open("open hacker news"), Some(IntentResult::with_entity(Intent::OpenSite, "hacker news")));
    }

    #[test]
    fn test_quoted_object() {
        assert_eq!(open(r#"open "Spotify""#), Some(IntentResult::with_entity(Intent::OpenApp, "spotify")));
    }

    #[test]
    fn test_only_fillers() {
        assert_eq!(open("open the website"), Some(IntentResult::new(Intent::OpenSite)));
    }

    #[test]
    fn test_site_candidates() {
        assert_eq!(site_candidates("youtube"), vec!["youtube"]);
        assert_eq!(site_candidates("google maps now"), vec!["google maps now", "google maps", "google"]);
    }
}
