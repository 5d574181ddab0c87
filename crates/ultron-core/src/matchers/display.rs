//! Display projection mode and night light

use once_cell::sync::Lazy;
use regex::Regex;

use super::MatchContext;
use crate::intent::{Intent, IntentResult};

static DISPLAY_NOUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:display|displays|screen|screens|monitor|monitors|projector|projection)\b").unwrap()
});

static EXTERNAL_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:second screen only|projector only|external (?:only|screen only|monitor only|display only)|only (?:the )?(?:second|external) (?:screen|monitor|display))\b",
    )
    .unwrap()
});

static INTERNAL_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:pc screen only|(?:internal|laptop|main) (?:only|screen only|display only)|only (?:the )?(?:pc|laptop|internal|main) (?:screen|monitor|display))\b",
    )
    .unwrap()
});

static CLONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:duplicate|duplicated|clone|mirror|mirrored)\b").unwrap());

static EXTEND: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bextend(?:ed)?\b").unwrap());

static NIGHT_LIGHT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bnight[\s-]?light\b|\bnight mode\b|\bblue light filter\b").unwrap()
});

static NIGHT_LIGHT_OFF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:off|disable|deactivate|stop)\b").unwrap());

static NIGHT_LIGHT_ON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:on|enable|activate|start)\b").unwrap());

/// Which projection mode the text asks for, most specific first
fn projection_mode(text: &str) -> Option<&'static str> {
    if EXTERNAL_ONLY.is_match(text) {
        Some("external")
    } else if INTERNAL_ONLY.is_match(text) {
        Some("internal")
    } else if CLONE.is_match(text) {
        Some("clone")
    } else if EXTEND.is_match(text) {
        Some("extend")
    } else {
        None
    }
}

pub fn detect_mode(text: &str) -> bool {
    DISPLAY_NOUN.is_match(text) && projection_mode(text).is_some()
}

pub fn extract_mode(_ctx: &MatchContext, text: &str) -> Option<IntentResult> {
    projection_mode(text).map(|mode| IntentResult::with_entity(Intent::DisplayMode, mode))
}

pub fn detect_night_light(text: &str) -> bool {
    NIGHT_LIGHT.is_match(text)
}

pub fn extract_night_light(_ctx: &MatchContext, text: &str) -> Option<IntentResult> {
    let intent = if NIGHT_LIGHT_OFF.is_match(text) {
        Intent::NightLightOff
    } else if NIGHT_LIGHT_ON.is_match(text) {
        Intent::NightLightOn
    } else {
        Intent::NightLightToggle
    };
    Some(IntentResult::new(intent))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode(text: &str) -> Option<String> {
        extract_mode(&MatchContext::default(), text).and_then(|r| r.entity)
    }

    #[test]
    fn test_display_modes() {
        assert_eq!(mode("extend my display"), Some("extend".to_string()));
        assert_eq!(mode("duplicate the screen"), Some("clone".to_string()));
        assert_eq!(mode("mirror my monitor"), Some("clone".to_string()));
        assert_eq!(mode("second screen only"), Some("external".to_string()));
        assert_eq!(mode("switch to pc screen only"), Some("internal".to_string()));
    }

    #[test]
    fn test_display_needs_noun() {
        assert!(!detect_mode("extend the deadline"));
        assert!(!detect_mode("take a screenshot"));
        assert!(detect_mode("extend my display"));
    }

    #[test]
    fn test_night_light() {
        let ctx = MatchContext::default();
        assert!(detect_night_light("turn on night light"));
        assert_eq!(extract_night_light(&ctx, "turn on night light").unwrap().intent, Intent::NightLightOn);
        assert_eq!(extract_night_light(&ctx, "disable night mode").unwrap().intent, Intent::NightLightOff);
        assert_eq!(extract_night_light(&ctx, "toggle night light").unwrap().intent, Intent::NightLightToggle);
    }
}
