//! Audio output device names
//!
//! Helpers for turning a spoken device phrase into something the audio
//! backend can match against its endpoint list.

/// Words that name a class of device rather than a specific one
pub const GENERIC_AUDIO_WORDS: &[&str] = &[
    "the",
    "my",
    "a",
    "default",
    "audio",
    "sound",
    "output",
    "outputs",
    "device",
    "devices",
    "playback",
    "speaker",
    "speakers",
    "headphone",
    "headphones",
    "headset",
    "earbuds",
];

/// Trailing politeness that never belongs to a device name
pub const POLITENESS_WORDS: &[&str] = &["please", "now", "thanks"];

/// Short spoken hints with a well-known endpoint name
const DEVICE_HINTS: &[(&str, &str)] = &[
    ("hdmi", "HDMI"),
    ("tv", "HDMI"),
    ("bluetooth", "Bluetooth"),
    ("bt", "Bluetooth"),
    ("usb", "USB"),
    ("realtek", "Realtek"),
    ("airpods", "AirPods"),
];

/// Is this word (or phrase) only a generic device word?
pub fn is_generic(word: &str) -> bool {
    let lower = word.trim().to_lowercase();
    GENERIC_AUDIO_WORDS.contains(&lower.as_str())
}

pub fn is_politeness(word: &str) -> bool {
    let lower = word.trim().to_lowercase();
    POLITENESS_WORDS.contains(&lower.as_str())
}

/// Endpoint name for a known short hint ("tv", "bt"), if any
pub fn device_hint(name: &str) -> Option<&'static str> {
    let lower = name.trim().to_lowercase();
    DEVICE_HINTS
        .iter()
        .find(|(hint, _)| *hint == lower)
        .map(|(_, canonical)| *canonical)
}

/// Exact hint table lookup; unmatched names pass through unchanged
pub fn canonical_device_hint(name: &str) -> String {
    device_hint(name)
        .map(str::to_string)
        .unwrap_or_else(|| name.trim().to_string())
}

/// Pick the known endpoint that best matches a requested name.
///
/// Tries a similarity match first, then a case-insensitive substring match
/// in either direction.
pub fn best_device_match(requested: &str, known: &[String], cutoff: f32) -> Option<String> {
    let wanted = requested.trim().to_lowercase();
    if wanted.is_empty() || known.is_empty() {
        return None;
    }

    let lowered: Vec<String> = known.iter().map(|k| k.to_lowercase()).collect();
    let candidates: Vec<&str> = lowered.iter().map(|s| s.as_str()).collect();

    if let Some(best) = similar::get_close_matches(wanted.as_str(), &candidates, 1, cutoff).first() {
        if let Some(index) = lowered.iter().position(|k| k.as_str() == *best) {
            return Some(known[index].clone());
        }
    }

    // Substring fallback: "buds" → "OnePlus Buds Z2"
    lowered
        .iter()
        .position(|k| k.contains(&wanted) || wanted.contains(k.as_str()))
        .map(|index| known[index].clone())
}
