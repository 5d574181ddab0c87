//! Audio output listing and switching

use once_cell::sync::Lazy;
use regex::Regex;

use super::MatchContext;
use crate::devices;
use crate::intent::{Intent, IntentResult};
use crate::slots;

static AUDIO_NOUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:audio|sound|output|outputs|playback|speaker|speakers|headphone|headphones|headset|earbuds|device|devices)\b",
    )
    .unwrap()
});

static OUTPUT_DEVICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:output|outputs|playback|speaker|speakers|headphone|headphones|headset|earbuds|device|devices)\b",
    )
    .unwrap()
});

static LIST_VERB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:list|show|available|what are|which)\b").unwrap());

static SWITCH_VERB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:set|switch|change|route|move|default)\b").unwrap());

static SWITCH_TARGET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:switch|set|change|route|move)\b.*?\b(?:over to|onto|to)\s+(.+)$").unwrap());

static TO_TAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(?:over to|onto|to)\s+(.+)$").unwrap());

/// Does the text name an output device class (speaker, headphones, ...)?
pub fn mentions_output_device(text: &str) -> bool {
    OUTPUT_DEVICE.is_match(text)
}

pub fn detect_list(text: &str) -> bool {
    LIST_VERB.is_match(text) && AUDIO_NOUN.is_match(text) && !SWITCH_TARGET.is_match(text)
}

pub fn extract_list(_ctx: &MatchContext, _text: &str) -> Option<IntentResult> {
    Some(IntentResult::new(Intent::AudioListOutputs))
}

pub fn detect_switch(text: &str) -> bool {
    SWITCH_VERB.is_match(text) && AUDIO_NOUN.is_match(text)
}

pub fn extract_switch(_ctx: &MatchContext, text: &str) -> Option<IntentResult> {
    Some(IntentResult::with_optional_entity(
        Intent::AudioSwitchOutput,
        device_name(text),
    ))
}

/// The requested device, or `None` when only generic words remain
fn device_name(text: &str) -> Option<String> {
    if let Some(quoted) = slots::quoted_text(text) {
        return (quoted.chars().count() >= 2).then(|| devices::canonical_device_hint(&quoted));
    }

    let caps = SWITCH_TARGET.captures(text).or_else(|| TO_TAIL.captures(text))?;
    let tail = slots::trim_phrase(&caps[1]);

    let mut tokens: Vec<&str> = tail
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    while tokens.first().is_some_and(|t| devices::is_generic(t)) {
        tokens.remove(0);
    }
    while tokens
        .last()
        .is_some_and(|t| devices::is_generic(t) || devices::is_politeness(t))
    {
        tokens.pop();
    }

    let name = slots::trim_phrase(&tokens.join(" "));
    // Short hints are names in their own right
    if let Some(hint) = devices::device_hint(&name) {
        return Some(hint.to_string());
    }
    if name.chars().count() < 3 || devices::is_generic(&name) {
        return None;
    }
    Some(devices::canonical_device_hint(&name))
}
