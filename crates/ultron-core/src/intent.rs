//! Intent tags and the result record handed to the dispatcher

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Named payload values for intents that need more than one entity.
///
/// A slot that is present with a `None` value means the category fired but
/// could not extract that piece of data.
pub type Slots = BTreeMap<String, Option<String>>;

/// The classified action an utterance requests.
///
/// Serializes to the literal tag string the dispatcher switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
pub enum Intent {
    #[serde(rename = "open_site")]
    OpenSite,
    #[serde(rename = "open_app")]
    OpenApp,
    #[serde(rename = "calendar.create")]
    CalendarCreate,
    #[serde(rename = "wifi_status")]
    WifiStatus,
    #[serde(rename = "wifi_on")]
    WifiOn,
    #[serde(rename = "wifi_off")]
    WifiOff,
    #[serde(rename = "wifi_connect")]
    WifiConnect,
    #[serde(rename = "wifi_disconnect")]
    WifiDisconnect,
    #[serde(rename = "display_mode")]
    DisplayMode,
    #[serde(rename = "volume_set")]
    VolumeSet,
    #[serde(rename = "volume_up")]
    VolumeUp,
    #[serde(rename = "volume_down")]
    VolumeDown,
    #[serde(rename = "volume_mute")]
    VolumeMute,
    #[serde(rename = "volume_unmute")]
    VolumeUnmute,
    #[serde(rename = "brightness_set")]
    BrightnessSet,
    #[serde(rename = "brightness_up")]
    BrightnessUp,
    #[serde(rename = "brightness_down")]
    BrightnessDown,
    #[serde(rename = "night_light_on")]
    NightLightOn,
    #[serde(rename = "night_light_off")]
    NightLightOff,
    #[serde(rename = "night_light_toggle")]
    NightLightToggle,
    #[serde(rename = "window_minimize")]
    WindowMinimize,
    #[serde(rename = "window_maximize")]
    WindowMaximize,
    #[serde(rename = "window_close")]
    WindowClose,
    #[serde(rename = "screenshot")]
    Screenshot,
    #[serde(rename = "battery_query")]
    BatteryQuery,
    #[serde(rename = "power_sleep")]
    PowerSleep,
    #[serde(rename = "power_shutdown")]
    PowerShutdown,
    #[serde(rename = "power_restart")]
    PowerRestart,
    #[serde(rename = "power_lock")]
    PowerLock,
    #[serde(rename = "weather.get")]
    WeatherGet,
    #[serde(rename = "site.search")]
    SiteSearch,
    #[serde(rename = "audio_list_outputs")]
    AudioListOutputs,
    #[serde(rename = "audio_switch_output")]
    AudioSwitchOutput,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Intent {
    /// Every tag the parser can produce, in catalogue order.
    pub const ALL: &'static [Intent] = &[
        Intent::OpenSite,
        Intent::OpenApp,
        Intent::CalendarCreate,
        Intent::WifiStatus,
        Intent::WifiOn,
        Intent::WifiOff,
        Intent::WifiConnect,
        Intent::WifiDisconnect,
        Intent::DisplayMode,
        Intent::VolumeSet,
        Intent::VolumeUp,
        Intent::VolumeDown,
        Intent::VolumeMute,
        Intent::VolumeUnmute,
        Intent::BrightnessSet,
        Intent::BrightnessUp,
        Intent::BrightnessDown,
        Intent::NightLightOn,
        Intent::NightLightOff,
        Intent::NightLightToggle,
        Intent::WindowMinimize,
        Intent::WindowMaximize,
        Intent::WindowClose,
        Intent::Screenshot,
        Intent::BatteryQuery,
        Intent::PowerSleep,
        Intent::PowerShutdown,
        Intent::PowerRestart,
        Intent::PowerLock,
        Intent::WeatherGet,
        Intent::SiteSearch,
        Intent::AudioListOutputs,
        Intent::AudioSwitchOutput,
        Intent::Unknown,
    ];

    /// The wire tag for this intent
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::OpenSite => "open_site",
            Intent::OpenApp => "open_app",
            Intent::CalendarCreate => "calendar.create",
            Intent::WifiStatus => "wifi_status",
            Intent::WifiOn => "wifi_on",
            Intent::WifiOff => "wifi_off",
            Intent::WifiConnect => "wifi_connect",
            Intent::WifiDisconnect => "wifi_disconnect",
            Intent::DisplayMode => "display_mode",
            Intent::VolumeSet => "volume_set",
            Intent::VolumeUp => "volume_up",
            Intent::VolumeDown => "volume_down",
            Intent::VolumeMute => "volume_mute",
            Intent::VolumeUnmute => "volume_unmute",
            Intent::BrightnessSet => "brightness_set",
            Intent::BrightnessUp => "brightness_up",
            Intent::BrightnessDown => "brightness_down",
            Intent::NightLightOn => "night_light_on",
            Intent::NightLightOff => "night_light_off",
            Intent::NightLightToggle => "night_light_toggle",
            Intent::WindowMinimize => "window_minimize",
            Intent::WindowMaximize => "window_maximize",
            Intent::WindowClose => "window_close",
            Intent::Screenshot => "screenshot",
            Intent::BatteryQuery => "battery_query",
            Intent::PowerSleep => "power_sleep",
            Intent::PowerShutdown => "power_shutdown",
            Intent::PowerRestart => "power_restart",
            Intent::PowerLock => "power_lock",
            Intent::WeatherGet => "weather.get",
            Intent::SiteSearch => "site.search",
            Intent::AudioListOutputs => "audio_list_outputs",
            Intent::AudioSwitchOutput => "audio_switch_output",
            Intent::Unknown => "unknown",
        }
    }

    /// Look up an intent by its wire tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|intent| intent.as_str() == tag)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single output record of one parse.
///
/// Built fresh per utterance, consumed by the dispatcher, then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentResult {
    pub intent: Intent,
    /// Primary payload. `None` means nothing was extracted, not an error.
    pub entity: Option<String>,
    pub slots: Slots,
}

impl IntentResult {
    /// A result with no entity and no slots
    pub fn new(intent: Intent) -> Self {
        Self {
            intent,
            entity: None,
            slots: Slots::new(),
        }
    }

    /// The terminal no-match outcome
    pub fn unknown() -> Self {
        Self::new(Intent::Unknown)
    }

    pub fn with_entity(intent: Intent, entity: impl Into<String>) -> Self {
        Self {
            intent,
            entity: Some(entity.into()),
            slots: Slots::new(),
        }
    }

    pub fn with_optional_entity(intent: Intent, entity: Option<String>) -> Self {
        Self {
            intent,
            entity,
            slots: Slots::new(),
        }
    }

    /// Attach a slot, keeping explicit `None` values
    pub fn slot(mut self, name: &str, value: Option<String>) -> Self {
        self.slots.insert(name.to_string(), value);
        self
    }

    /// Value of a slot, if the slot exists and was filled
    pub fn get_slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name).and_then(|v| v.as_deref())
    }

    pub fn is_unknown(&self) -> bool {
        self.intent == Intent::Unknown
    }
}
