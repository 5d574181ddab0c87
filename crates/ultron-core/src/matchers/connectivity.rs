//! Wi-Fi status and control

use once_cell::sync::Lazy;
use regex::Regex;

use super::MatchContext;
use crate::intent::{Intent, IntentResult};
use crate::slots;

static WIFI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:wi-?fi|wi fi|wlan|wireless (?:network|internet|connection|adapter))\b").unwrap());

static STATUS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:is|are|am|what|what's|whats|which|how|how's|check|show|tell me)\b|\b(?:status|state|signal|am i connected|am i online)\b",
    )
    .unwrap()
});

static DISCONNECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bdisconnect\b").unwrap());

static CONNECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bconnect\b").unwrap());

static CONNECT_TARGET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bconnect\b.*?\bto\s+(.+)$").unwrap());

// "on"/"off" only count with a switching verb or right after the noun
static OFF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:turn|switch|shut|toggle|put)\b.*\boff\b|\b(?:disable|deactivate|shut down|kill)\b|\b(?:wi-?fi|wi fi|wlan)\s+off\b",
    )
    .unwrap()
});

static ON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:turn|switch|toggle|put)\b.*\bon\b|\b(?:enable|activate)\b|\b(?:wi-?fi|wi fi|wlan)\s+on\b",
    )
    .unwrap()
});

// Nothing but the noun, e.g. "wifi" or "my wi-fi"
static BARE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:the |my )?(?:wi-?fi|wi fi|wlan|wireless network)(?:\s+please)?$").unwrap()
});

/// Words stripped from both ends of a network name
const NETWORK_NOISE: &[&str] = &[
    "the", "my", "wifi", "wi-fi", "wi", "fi", "wlan", "wireless", "network", "named", "called",
    "please",
];

/// Does the utterance mention Wi-Fi at all?
pub fn mentions_wifi(text: &str) -> bool {
    WIFI.is_match(text)
}

/// The noun plus a status, connect or switching cue, or the noun alone
pub fn detect(text: &str) -> bool {
    mentions_wifi(text)
        && (STATUS.is_match(text)
            || DISCONNECT.is_match(text)
            || CONNECT.is_match(text)
            || OFF.is_match(text)
            || ON.is_match(text)
            || BARE.is_match(text))
}

/// Status questions win, then disconnect, connect, off, on; anything else
/// is treated as a status query.
pub fn extract(_ctx: &MatchContext, text: &str) -> Option<IntentResult> {
    let result = if STATUS.is_match(text) {
        IntentResult::new(Intent::WifiStatus)
    } else if DISCONNECT.is_match(text) {
        IntentResult::new(Intent::WifiDisconnect)
    } else if CONNECT.is_match(text) {
        IntentResult::with_optional_entity(Intent::WifiConnect, network_name(text))
    } else if OFF.is_match(text) {
        IntentResult::new(Intent::WifiOff)
    } else if ON.is_match(text) {
        IntentResult::new(Intent::WifiOn)
    } else {
        IntentResult::new(Intent::WifiStatus)
    };
    Some(result)
}

/// SSID from quotes, else from the tail after "connect ... to"
fn network_name(text: &str) -> Option<String> {
    if let Some(quoted) = slots::quoted_text(text) {
        return Some(quoted);
    }

    let caps = CONNECT_TARGET.captures(text)?;
    let tail = slots::trim_phrase(&caps[1]);
    let mut tokens: Vec<&str> = tail.split_whitespace().collect();

    while tokens.first().is_some_and(|t| is_noise(t)) {
        tokens.remove(0);
    }
    while tokens.last().is_some_and(|t| is_noise(t)) {
        tokens.pop();
    }

    let name = tokens.join(" ");
    (!name.is_empty()).then_some(name)
}

fn is_noise(token: &str) -> bool {
    NETWORK_NOISE.contains(&token.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(text: &str) -> IntentResult {
        extract(&MatchContext::default(), text).unwrap()
    }

    #[test]
    fn test_detect() {
        assert!(detect("turn Wi-Fi off"));
        assert!(detect("enable wifi"));
        assert!(detect("is the wireless network working"));
        assert!(detect("my wifi"));
        assert!(!detect("open youtube"));
    }

    #[test]
    fn test_noun_without_cue_is_ignored() {
        assert!(!detect("search amazon for wireless headphones"));
        assert!(!detect("find wireless earbuds on amazon"));
        assert!(!detect("search amazon for a wifi extender"));
        assert!(!detect("find wifi extenders on amazon"));
    }

    #[test]
    fn test_off_and_on() {
        assert_eq!(intent("turn Wi-Fi off").intent, Intent::WifiOff);
        assert_eq!(intent("disable wifi").intent, Intent::WifiOff);
        assert_eq!(intent("turn on the wifi").intent, Intent::WifiOn);
    }

    #[test]
    fn test_status_questions_win() {
        assert_eq!(intent("is wifi on").intent, Intent::WifiStatus);
        assert_eq!(intent("what's my wifi status").intent, Intent::WifiStatus);
        assert_eq!(intent("wifi").intent, Intent::WifiStatus);
    }

    #[test]
    fn test_disconnect_before_connect() {
        assert_eq!(intent("disconnect from wifi").intent, Intent::WifiDisconnect);
    }

    #[test]
    fn test_connect_with_network() {
        let result = intent("connect to wifi network HomeNet");
        assert_eq!(result.intent, Intent::WifiConnect);
        assert_eq!(result.entity.as_deref(), Some("HomeNet"));

        let result = intent(r#"connect wifi to "Cafe Guest 5G""#);
        assert_eq!(result.entity.as_deref(), Some("Cafe Guest 5G"));
    }

    #[test]
    fn test_connect_without_network() {
        let result = intent("connect to wifi");
        assert_eq!(result.intent, Intent::WifiConnect);
        assert_eq!(result.entity, None);
    }
}
