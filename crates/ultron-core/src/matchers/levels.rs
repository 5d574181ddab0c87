//! Volume and brightness
//!
//! Both share one grammar: an explicit target ("to 40", "50%") sets the
//! level, a direction word steps it ("up", "dim", "by 10"), and a bare set
//! verb with no usable number still yields a set intent with no value.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{audio, MatchContext};
use crate::intent::{Intent, IntentResult};
use crate::slots;

static VOLUME_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:volume|louder|quieter|softer)\b").unwrap());

static SOUND_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bsound\b").unwrap());

/// "mute" as a command: leading the utterance, aimed at the sound, or
/// switched on/off. Inside a search query it is just a word.
fn mute_command(verb: &str, toggle: &str) -> Regex {
    Regex::new(&format!(
        r"(?i)^(?:please\s+|(?:can|could|would)\s+you\s+(?:please\s+)?)?{verb}\b|\b{verb}\s+(?:the\s+|my\s+|all\s+)?(?:volume|sound|audio|speakers?|computer|pc|laptop|system|it|everything)\b|\b(?:turn|switch)\s+{toggle}\s+mute\b"
    ))
    .unwrap()
}

static MUTE: Lazy<Regex> = Lazy::new(|| mute_command("mute", "on"));

static UNMUTE: Lazy<Regex> = Lazy::new(|| mute_command("un-?mute", "off"));

static VOLUME_UP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:up|increase|raise|louder|boost|higher)\b").unwrap());

static VOLUME_DOWN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:down|decrease|lower|reduce|quieter|softer)\b").unwrap());

static VOLUME_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bvolume\s+\d").unwrap());

static BRIGHTNESS_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:brightness|brighter|dimmer|dim)\b").unwrap());

static BRIGHTNESS_UP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:up|increase|raise|brighter|boost|higher)\b").unwrap());

static BRIGHTNESS_DOWN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:down|decrease|lower|reduce|dim|dimmer|darker)\b").unwrap()
});

static BRIGHTNESS_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bbrightness\s+\d").unwrap());

static EXPLICIT_TARGET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:to|at)\s+\d|\d{1,3}\s*(?:%|percent\b)").unwrap());

static STEP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bby\s+\d").unwrap());

static SET_VERB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:set|make|change|put|adjust)\b").unwrap());

/// The pieces that differ between volume and brightness
struct LevelGrammar {
    raise: &'static Lazy<Regex>,
    lower: &'static Lazy<Regex>,
    number: &'static Lazy<Regex>,
    set: Intent,
    up: Intent,
    down: Intent,
}

static VOLUME: LevelGrammar = LevelGrammar {
    raise: &VOLUME_UP,
    lower: &VOLUME_DOWN,
    number: &VOLUME_NUMBER,
    set: Intent::VolumeSet,
    up: Intent::VolumeUp,
    down: Intent::VolumeDown,
};

static BRIGHTNESS: LevelGrammar = LevelGrammar {
    raise: &BRIGHTNESS_UP,
    lower: &BRIGHTNESS_DOWN,
    number: &BRIGHTNESS_NUMBER,
    set: Intent::BrightnessSet,
    up: Intent::BrightnessUp,
    down: Intent::BrightnessDown,
};

fn mentions_volume(text: &str) -> bool {
    // "sound" alone names the level, "sound output" names a device
    VOLUME_WORD.is_match(text) || (SOUND_WORD.is_match(text) && !audio::mentions_output_device(text))
}

pub fn detect_volume(text: &str) -> bool {
    mentions_volume(text) || MUTE.is_match(text) || UNMUTE.is_match(text)
}

pub fn extract_volume(_ctx: &MatchContext, text: &str) -> Option<IntentResult> {
    if UNMUTE.is_match(text) {
        return Some(IntentResult::new(Intent::VolumeUnmute));
    }
    if MUTE.is_match(text) {
        return Some(IntentResult::new(Intent::VolumeMute));
    }
    extract_level(&VOLUME, text)
}

pub fn detect_brightness(text: &str) -> bool {
    BRIGHTNESS_WORD.is_match(text)
}

pub fn extract_brightness(_ctx: &MatchContext, text: &str) -> Option<IntentResult> {
    extract_level(&BRIGHTNESS, text)
}

fn extract_level(grammar: &LevelGrammar, text: &str) -> Option<IntentResult> {
    let value = slots::bounded_int(text).map(|n| n.to_string());
    let raise = grammar.raise.is_match(text);
    let lower = grammar.lower.is_match(text);

    // "by N" is always a relative step, even with "percent" after it
    if STEP.is_match(text) && (raise || lower) {
        let intent = if raise { grammar.up } else { grammar.down };
        return Some(IntentResult::with_optional_entity(intent, value));
    }

    if EXPLICIT_TARGET.is_match(text) || grammar.number.is_match(text) {
        return Some(IntentResult::with_optional_entity(grammar.set, value));
    }

    if raise {
        return Some(IntentResult::with_optional_entity(grammar.up, value));
    }
    if lower {
        return Some(IntentResult::with_optional_entity(grammar.down, value));
    }

    if SET_VERB.is_match(text) {
        return Some(IntentResult::with_optional_entity(grammar.set, value));
    }

    None
}
