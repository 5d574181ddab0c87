//! Action planning
//!
//! Turns an [`IntentResult`] into the concrete step a dispatcher would
//! take, without performing it. Missing required data becomes a
//! clarification prompt, and intents whose capability is switched off
//! become [`Action::Unsupported`].

use serde::Serialize;
use std::fmt;

use crate::config::Config;
use crate::devices;
use crate::intent::{Intent, IntentResult};
use crate::site_search::{build_site_search_url, ensure_url};

pub const CLARIFY_SITE: &str = "Which site should I open?";
pub const CLARIFY_APP: &str = "Which app should I open?";
pub const CLARIFY_LEVEL: &str = "What level? Say a number from 0 to 100.";
pub const CLARIFY_NETWORK: &str = "Which Wi-Fi network should I connect to?";
pub const CLARIFY_DISPLAY: &str = "Which display mode: extend, duplicate, PC screen only or second screen only?";
pub const CLARIFY_EVENT_TIME: &str =
    "When should I schedule it? Try: 'create an event project sync tomorrow at 8:30 am'.";
pub const CLARIFY_DEVICE: &str = "Tell me the device name, like 'switch audio to OnePlus Buds Z2'. \
                                  You can also say 'list audio outputs'.";
pub const CLARIFY_UNKNOWN: &str =
    "Sorry, I didn't get that. Try 'open youtube', 'set volume to 40' or 'what's the weather'.";

const DEFAULT_EVENT_TITLE: &str = "New event";

/// What the dispatcher should do for one utterance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    OpenUrl { url: String, browser: String },
    LaunchApp { app: String },
    /// A system-control intent with its optional value
    Control { intent: Intent, value: Option<String> },
    Weather { city: String, when: String },
    CreateEvent { title: String, when: String },
    SwitchAudio { device: String },
    AskAssistant { query: String },
    Clarify { prompt: String },
    Unsupported { intent: Intent },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::OpenUrl { url, browser } => write!(f, "open {url} in {browser} browser"),
            Action::LaunchApp { app } => write!(f, "launch {app}"),
            Action::Control { intent, value: Some(value) } => write!(f, "{intent} ({value})"),
            Action::Control { intent, value: None } => write!(f, "{intent}"),
            Action::Weather { city, when } => write!(f, "weather for {city} ({when})"),
            Action::CreateEvent { title, when } => write!(f, "create event '{title}' at {when}"),
            Action::SwitchAudio { device } => write!(f, "switch audio output to {device}"),
            Action::AskAssistant { query } => write!(f, "ask assistant: {query}"),
            Action::Clarify { prompt } => write!(f, "clarify: {prompt}"),
            Action::Unsupported { intent } => write!(f, "unsupported: {intent}"),
        }
    }
}

fn clarify(prompt: &str) -> Action {
    Action::Clarify {
        prompt: prompt.to_string(),
    }
}

/// Plan the dispatcher step for a parse result.
///
/// `utterance` is the original text, handed to the assistant for unknown
/// intents.
pub fn plan(result: &IntentResult, utterance: &str, config: &Config) -> Action {
    let entity = result.entity.as_deref().map(str::trim).filter(|e| !e.is_empty());
    let caps = &config.capabilities;

    let action = match result.intent {
        Intent::OpenSite => match entity {
            Some(site) => Action::OpenUrl {
                url: ensure_url(site),
                browser: config.browser.preference.as_str().to_string(),
            },
            None => clarify(CLARIFY_SITE),
        },

        Intent::OpenApp => match entity {
            Some(app) => Action::LaunchApp { app: app.to_string() },
            None => clarify(CLARIFY_APP),
        },

        Intent::SiteSearch => Action::OpenUrl {
            url: build_site_search_url(result.get_slot("site"), result.get_slot("query"), true),
            browser: config.browser.preference.as_str().to_string(),
        },

        Intent::WeatherGet => Action::Weather {
            city: result
                .get_slot("city")
                .unwrap_or(&config.weather.default_city)
                .to_string(),
            when: result.get_slot("when").unwrap_or("today").to_string(),
        },

        Intent::CalendarCreate if !caps.calendar => Action::Unsupported { intent: result.intent },
        Intent::CalendarCreate => match result.get_slot("when") {
            Some(when) => Action::CreateEvent {
                title: result
                    .get_slot("title")
                    .or(entity)
                    .unwrap_or(DEFAULT_EVENT_TITLE)
                    .to_string(),
                when: when.to_string(),
            },
            None => clarify(CLARIFY_EVENT_TIME),
        },

        Intent::Unknown => {
            let query = utterance.trim();
            if caps.assistant && !query.is_empty() {
                Action::AskAssistant {
                    query: query.to_string(),
                }
            } else {
                clarify(CLARIFY_UNKNOWN)
            }
        }

        // Everything below drives the local machine
        intent if !caps.system_control => Action::Unsupported { intent },

        Intent::VolumeSet | Intent::BrightnessSet => match entity.and_then(|e| e.parse::<u8>().ok()) {
            Some(level) => control(result.intent, Some(level.min(100).to_string())),
            None => clarify(CLARIFY_LEVEL),
        },

        Intent::VolumeUp | Intent::VolumeDown => control(
            result.intent,
            Some(entity.map(str::to_string).unwrap_or_else(|| config.audio.volume_step.to_string())),
        ),

        Intent::BrightnessUp | Intent::BrightnessDown => control(
            result.intent,
            Some(entity.map(str::to_string).unwrap_or_else(|| config.audio.brightness_step.to_string())),
        ),

        Intent::WifiConnect => match entity {
            Some(ssid) => control(result.intent, Some(ssid.to_string())),
            None => clarify(CLARIFY_NETWORK),
        },

        Intent::DisplayMode => match entity {
            Some(mode) => control(result.intent, Some(mode.to_string())),
            None => clarify(CLARIFY_DISPLAY),
        },

        Intent::AudioSwitchOutput => match entity {
            Some(requested) => Action::SwitchAudio {
                device: devices::best_device_match(
                    requested,
                    &config.audio.known_outputs,
                    config.matching.device_cutoff,
                )
                .unwrap_or_else(|| requested.to_string()),
            },
            None => clarify(CLARIFY_DEVICE),
        },

        Intent::WifiStatus
        | Intent::WifiOn
        | Intent::WifiOff
        | Intent::WifiDisconnect
        | Intent::VolumeMute
        | Intent::VolumeUnmute
        | Intent::NightLightOn
        | Intent::NightLightOff
        | Intent::NightLightToggle
        | Intent::WindowMinimize
        | Intent::WindowMaximize
        | Intent::WindowClose
        | Intent::Screenshot
        | Intent::BatteryQuery
        | Intent::PowerSleep
        | Intent::PowerShutdown
        | Intent::PowerRestart
        | Intent::PowerLock
        | Intent::AudioListOutputs => control(result.intent, entity.map(str::to_string)),
    };

    tracing::debug!(intent = %result.intent, action = %action, "Planned action");
    action
}

fn control(intent: Intent, value: Option<String>) -> Action {
    Action::Control { intent, value }
}
