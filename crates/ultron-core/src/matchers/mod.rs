//! Intent matchers
//!
//! Each family module owns the patterns for a group of related intents.
//! The families are stitched into one ordered cascade:
//! 1. Bare app name - the whole utterance is an application alias
//! 2. Calendar - event creation
//! 3. Wi-Fi - status, toggle, connect, disconnect
//! 4. Display mode - extend, clone, single-screen projection
//! 5. Volume - set, step, mute
//! 6. Brightness - set, step
//! 7. Night light
//! 8. Window management
//! 9. Screenshot
//! 10. Battery
//! 11. Power - restart, sleep, shutdown, lock
//! 12. Weather
//! 13. Site search
//! 14. URL or bare domain
//! 15. Audio output listing
//! 16. Audio output switching
//! 17. Open/launch command
//!
//! The first category whose trigger matches and whose extractor produces a
//! result wins; later categories are never consulted.

mod app;
mod audio;
mod calendar;
mod connectivity;
mod desktop;
mod display;
mod levels;
mod power;
mod search;
mod weather;
mod web;

use crate::intent::IntentResult;

/// Settings the extractors need at match time
#[derive(Debug, Clone, Copy)]
pub struct MatchContext {
    /// Similarity cutoff for fuzzy alias lookups
    pub alias_cutoff: f32,
}

impl Default for MatchContext {
    fn default() -> Self {
        Self {
            alias_cutoff: crate::aliases::DEFAULT_ALIAS_CUTOFF,
        }
    }
}

/// A group of related intents tested as one unit of the cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    BareApp,
    Calendar,
    Wifi,
    DisplayMode,
    Volume,
    Brightness,
    NightLight,
    Window,
    Screenshot,
    Battery,
    Power,
    Weather,
    SiteSearch,
    Url,
    AudioList,
    AudioSwitch,
    OpenCommand,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::BareApp => "bare_app",
            Category::Calendar => "calendar",
            Category::Wifi => "wifi",
            Category::DisplayMode => "display_mode",
            Category::Volume => "volume",
            Category::Brightness => "brightness",
            Category::NightLight => "night_light",
            Category::Window => "window",
            Category::Screenshot => "screenshot",
            Category::Battery => "battery",
            Category::Power => "power",
            Category::Weather => "weather",
            Category::SiteSearch => "site_search",
            Category::Url => "url",
            Category::AudioList => "audio_list",
            Category::AudioSwitch => "audio_switch",
            Category::OpenCommand => "open_command",
        }
    }
}

/// One step of the cascade
pub struct Matcher {
    /// Position in the cascade, 1 is tried first
    pub priority: u8,
    pub category: Category,
    /// Trigger test on normalized text
    pub detect: fn(&str) -> bool,
    /// Build the result. `None` means the category declines after all and
    /// the cascade moves on.
    pub extract: fn(&MatchContext, &str) -> Option<IntentResult>,
}

/// The full cascade in priority order
pub static CASCADE: &[Matcher] = &[
    Matcher {
        priority: 1,
        category: Category::BareApp,
        detect: app::is_bare_app,
        extract: app::extract_bare_app,
    },
    Matcher {
        priority: 2,
        category: Category::Calendar,
        detect: calendar::detect,
        extract: calendar::extract,
    },
    Matcher {
        priority: 3,
        category: Category::Wifi,
        detect: connectivity::detect,
        extract: connectivity::extract,
    },
    Matcher {
        priority: 4,
        category: Category::DisplayMode,
        detect: display::detect_mode,
        extract: display::extract_mode,
    },
    Matcher {
        priority: 5,
        category: Category::Volume,
        detect: levels::detect_volume,
        extract: levels::extract_volume,
    },
    Matcher {
        priority: 6,
        category: Category::Brightness,
        detect: levels::detect_brightness,
        extract: levels::extract_brightness,
    },
    Matcher {
        priority: 7,
        category: Category::NightLight,
        detect: display::detect_night_light,
        extract: display::extract_night_light,
    },
    Matcher {
        priority: 8,
        category: Category::Window,
        detect: desktop::detect_window,
        extract: desktop::extract_window,
    },
    Matcher {
        priority: 9,
        category: Category::Screenshot,
        detect: desktop::detect_screenshot,
        extract: desktop::extract_screenshot,
    },
    Matcher {
        priority: 10,
        category: Category::Battery,
        detect: power::detect_battery,
        extract: power::extract_battery,
    },
    Matcher {
        priority: 11,
        category: Category::Power,
        detect: power::detect_power,
        extract: power::extract_power,
    },
    Matcher {
        priority: 12,
        category: Category::Weather,
        detect: weather::detect,
        extract: weather::extract,
    },
    Matcher {
        priority: 13,
        category: Category::SiteSearch,
        detect: search::detect,
        extract: search::extract,
    },
    Matcher {
        priority: 14,
        category: Category::Url,
        detect: web::detect,
        extract: web::extract,
    },
    Matcher {
        priority: 15,
        category: Category::AudioList,
        detect: audio::detect_list,
        extract: audio::extract_list,
    },
    Matcher {
        priority: 16,
        category: Category::AudioSwitch,
        detect: audio::detect_switch,
        extract: audio::extract_switch,
    },
    Matcher {
        priority: 17,
        category: Category::OpenCommand,
        detect: app::is_open_command,
        extract: app::extract_open_command,
    },
];

/// Run the cascade over normalized text.
///
/// Returns the winning category with its result, or `None` when nothing
/// fires.
pub fn run_cascade(ctx: &MatchContext, text: &str) -> Option<(Category, IntentResult)> {
    for matcher in CASCADE {
        if !(matcher.detect)(text) {
            continue;
        }
        match (matcher.extract)(ctx, text) {
            Some(result) => return Some((matcher.category, result)),
            None => {
                tracing::trace!(category = matcher.category.as_str(), "Trigger matched but extractor declined");
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_priorities_strictly_increase() {
        let priorities: Vec<u8> = CASCADE.iter().map(|m| m.priority).collect();
        assert_eq!(priorities.first(), Some(&1));
        assert!(priorities.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_each_category_once() {
        let categories: HashSet<Category> = CASCADE.iter().map(|m| m.category).collect();
        assert_eq!(categories.len(), CASCADE.len());
        assert_eq!(CASCADE.len(), 17);
    }

    #[test]
    fn test_empty_text_matches_nothing() {
        assert!(run_cascade(&MatchContext::default(), "").is_none());
    }
}
