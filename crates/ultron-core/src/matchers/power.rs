//! Battery queries and power actions

use once_cell::sync::Lazy;
use regex::Regex;

use super::{connectivity, MatchContext};
use crate::intent::{Intent, IntentResult};

static BATTERY_NOUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:battery|charge|charging)\b").unwrap());

static LEVEL_NOUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:level|percent|percentage|left|remaining|status|life|how much)\b|%").unwrap()
});

// Optional politeness around a one-word command
const BARE_PREFIX: &str = r"^(?:please\s+)?";
const BARE_SUFFIX: &str = r"(?:\s+(?:now|please))*$";
const MACHINE: &str = r"(?:the |my |this )?(?:pc|computer|laptop|system|machine)";

/// The verb alone, or a verb aimed at the machine
fn power_command(bare: &str, aimed: &str, extra: &[&str]) -> Regex {
    let mut alternatives = vec![
        format!("{BARE_PREFIX}(?:{bare}){BARE_SUFFIX}"),
        format!(r"\b(?:{aimed})\s+{MACHINE}\b"),
    ];
    alternatives.extend(extra.iter().map(|e| e.to_string()));
    Regex::new(&format!("(?i){}", alternatives.join("|"))).unwrap()
}

static RESTART: Lazy<Regex> = Lazy::new(|| power_command("restart|reboot", "restart|reboot", &[]));

static SHUTDOWN: Lazy<Regex> = Lazy::new(|| {
    let machine_off = format!(r"\b(?:turn|switch|shut|power) {MACHINE} (?:off|down)\b");
    power_command(
        r"shut\s?down|power (?:off|down)",
        r"shut\s?down|power (?:off|down)|turn off|switch off|shut off",
        &[machine_off.as_str()],
    )
});

static SLEEP: Lazy<Regex> = Lazy::new(|| {
    let put_to_sleep = format!(r"\b(?:put|send)\s+{MACHINE}\s+to\s+sleep\b");
    power_command(
        "sleep|hibernate|suspend",
        "sleep|hibernate|suspend",
        &[
            put_to_sleep.as_str(),
            r"^(?:please\s+)?go to sleep\b",
            r"\b(?:enter|into|in)\s+sleep mode\b",
        ],
    )
});

static LOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\block (?:the |my )?(?:pc|computer|screen|laptop|workstation|machine|it)\b|^lock$").unwrap()
});

pub fn detect_battery(text: &str) -> bool {
    BATTERY_NOUN.is_match(text) && LEVEL_NOUN.is_match(text)
}

pub fn extract_battery(_ctx: &MatchContext, _text: &str) -> Option<IntentResult> {
    Some(IntentResult::new(Intent::BatteryQuery))
}

pub fn detect_power(text: &str) -> bool {
    power_action(text).is_some()
}

pub fn extract_power(_ctx: &MatchContext, text: &str) -> Option<IntentResult> {
    power_action(text).map(IntentResult::new)
}

fn power_action(text: &str) -> Option<Intent> {
    if RESTART.is_match(text) {
        Some(Intent::PowerRestart)
    } else if SLEEP.is_match(text) {
        Some(Intent::PowerSleep)
    } else if SHUTDOWN.is_match(text) && !connectivity::mentions_wifi(text) {
        // "shut down wifi" is a radio toggle, not a power action
        Some(Intent::PowerShutdown)
    } else if LOCK.is_match(text) {
        Some(Intent::PowerLock)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battery() {
        assert!(detect_battery("what's my battery percentage"));
        assert!(detect_battery("how much battery is left"));
        assert!(!detect_battery("battery"));
        assert!(!detect_battery("check the level"));
    }

    #[test]
    fn test_power_actions() {
        assert_eq!(power_action("restart the computer"), Some(Intent::PowerRestart));
        assert_eq!(power_action("put the pc to sleep"), Some(Intent::PowerSleep));
        assert_eq!(power_action("shut down"), Some(Intent::PowerShutdown));
        assert_eq!(power_action("turn off the computer"), Some(Intent::PowerShutdown));
        assert_eq!(power_action("lock my pc"), Some(Intent::PowerLock));
    }

    #[test]
    fn test_shutdown_excludes_wifi() {
        assert_eq!(power_action("shut down wifi"), None);
    }

    #[test]
    fn test_bare_commands() {
        assert_eq!(power_action("reboot"), Some(Intent::PowerRestart));
        assert_eq!(power_action("please restart now"), Some(Intent::PowerRestart));
        assert_eq!(power_action("hibernate"), Some(Intent::PowerSleep));
        assert_eq!(power_action("go to sleep"), Some(Intent::PowerSleep));
        assert_eq!(power_action("put the laptop into sleep mode"), Some(Intent::PowerSleep));
        assert_eq!(power_action("power off my laptop"), Some(Intent::PowerShutdown));
    }

    #[test]
    fn test_power_words_inside_queries() {
        assert_eq!(power_action("search youtube for sleep music"), None);
        assert_eq!(power_action("search wikipedia for sleep apnea"), None);
        assert_eq!(power_action("search youtube for how to restart a router"), None);
        assert_eq!(power_action("restart spotify"), None);
        assert_eq!(power_action("find a shutdown sound"), None);
    }

    #[test]
    fn test_turn_off_needs_machine() {
        assert_eq!(power_action("turn off the lights"), None);
    }
}
