//! Configuration management for Ultron

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::aliases::DEFAULT_ALIAS_CUTOFF;

/// Environment variables that override file values
pub mod env_vars {
    pub const DEFAULT_CITY: &str = "ULTRON_DEFAULT_CITY";
    pub const UNITS: &str = "ULTRON_UNITS";
    pub const BROWSER: &str = "ULTRON_BROWSER";
    pub const WAKE_WORD: &str = "ULTRON_WAKE_WORD";
    pub const ALIAS_CUTOFF: &str = "ULTRON_ALIAS_CUTOFF";
}

/// Default similarity cutoff for matching spoken device names
pub const DEFAULT_DEVICE_CUTOFF: f32 = 0.6;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Temperature units for weather reports
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Imperial in the US, metric elsewhere
    #[default]
    Auto,
    Metric,
    Imperial,
}

impl Units {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "metric" | "c" | "celsius" => Some(Self::Metric),
            "imperial" | "f" | "fahrenheit" => Some(Self::Imperial),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

/// Browser used to open sites and searches
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    /// The system default handler
    #[default]
    Default,
    Chrome,
    Edge,
    Firefox,
    Brave,
    Opera,
}

impl Browser {
    /// Accepts spoken aliases too ("google chrome", "microsoft edge")
    pub fn from_name(name: &str) -> Option<Self> {
        let id = crate::aliases::APP_ALIASES.exact(name).unwrap_or("");
        match id {
            "default" => Some(Self::Default),
            "chrome" => Some(Self::Chrome),
            "edge" => Some(Self::Edge),
            "firefox" => Some(Self::Firefox),
            "brave" => Some(Self::Brave),
            "opera" => Some(Self::Opera),
            _ => match name.trim().to_lowercase().as_str() {
                "default" | "system" => Some(Self::Default),
                _ => None,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Chrome => "chrome",
            Self::Edge => "edge",
            Self::Firefox => "firefox",
            Self::Brave => "brave",
            Self::Opera => "opera",
        }
    }
}

/// Matching thresholds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatchingOptions {
    /// Cutoff for fuzzy site/app alias lookups
    pub alias_cutoff: f32,
    /// Cutoff for matching a spoken device name against known outputs
    pub device_cutoff: f32,
    /// Leading wake word stripped before matching (empty disables)
    pub wake_word: String,
}

impl Default for MatchingOptions {
    fn default() -> Self {
        Self {
            alias_cutoff: DEFAULT_ALIAS_CUTOFF,
            device_cutoff: DEFAULT_DEVICE_CUTOFF,
            wake_word: "ultron".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WeatherOptions {
    /// City used when the utterance names none
    pub default_city: String,
    pub units: Units,
}

impl Default for WeatherOptions {
    fn default() -> Self {
        Self {
            default_city: "Newark, NJ".to_string(),
            units: Units::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BrowserOptions {
    pub preference: Browser,
}

/// Audio and display stepping
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioOptions {
    /// Output devices a requested name is matched against
    pub known_outputs: Vec<String>,
    /// Percent applied by "volume up" with no number
    pub volume_step: u8,
    /// Percent applied by "brightness up" with no number
    pub brightness_step: u8,
}

impl Default for AudioOptions {
    fn default() -> Self {
        Self {
            known_outputs: vec![],
            volume_step: 5,
            brightness_step: 10,
        }
    }
}

/// Which dispatcher capabilities are available on this machine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Capabilities {
    pub system_control: bool,
    pub calendar: bool,
    /// Free-form fallback for unknown utterances
    pub assistant: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            system_control: true,
            calendar: true,
            assistant: false,
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub matching: MatchingOptions,
    pub weather: WeatherOptions,
    pub browser: BrowserOptions,
    pub audio: AudioOptions,
    pub capabilities: Capabilities,
}

impl Config {
    /// Load configuration from file or use defaults, then apply env overrides
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        let mut config = Self::load_file(&config_path)?;
        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Read one file without env overrides; a missing file yields defaults
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = ?path, "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = ?path, "Loaded config");
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<&str>) -> Result<PathBuf> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, contents).map_err(|source| ConfigError::Write {
            path: config_path.clone(),
            source,
        })?;
        Ok(config_path)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "ultron", "ultron").ok_or(ConfigError::NoConfigDir)?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Apply overrides from a variable lookup (normally the process env).
    ///
    /// Unparseable values are ignored with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(city) = lookup(env_vars::DEFAULT_CITY).filter(|c| !c.trim().is_empty()) {
            self.weather.default_city = city.trim().to_string();
        }

        if let Some(units) = lookup(env_vars::UNITS) {
            match Units::from_name(&units) {
                Some(u) => self.weather.units = u,
                None => tracing::warn!(value = %units, "Ignoring unknown {}", env_vars::UNITS),
            }
        }

        if let Some(browser) = lookup(env_vars::BROWSER) {
            match Browser::from_name(&browser) {
                Some(b) => self.browser.preference = b,
                None => tracing::warn!(value = %browser, "Ignoring unknown {}", env_vars::BROWSER),
            }
        }

        if let Some(wake) = lookup(env_vars::WAKE_WORD) {
            self.matching.wake_word = wake.trim().to_string();
        }

        if let Some(cutoff) = lookup(env_vars::ALIAS_CUTOFF) {
            match cutoff.trim().parse::<f32>() {
                Ok(c) => self.matching.alias_cutoff = c,
                Err(_) => tracing::warn!(value = %cutoff, "Ignoring unparseable {}", env_vars::ALIAS_CUTOFF),
            }
        }
    }

    /// Reject values the matchers cannot work with
    pub fn validate(&self) -> Result<()> {
        check_cutoff("matching.alias_cutoff", self.matching.alias_cutoff)?;
        check_cutoff("matching.device_cutoff", self.matching.device_cutoff)?;

        if self.audio.volume_step > 100 {
            return Err(ConfigError::Invalid {
                field: "audio.volume_step",
                message: format!("{} is above 100", self.audio.volume_step),
            });
        }
        if self.audio.brightness_step > 100 {
            return Err(ConfigError::Invalid {
                field: "audio.brightness_step",
                message: format!("{} is above 100", self.audio.brightness_step),
            });
        }
        Ok(())
    }

    /// Remember an output device name, ignoring case-insensitive duplicates
    pub fn add_known_output(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty()
            || self
                .audio
                .known_outputs
                .iter()
                .any(|known| known.eq_ignore_ascii_case(name))
        {
            return false;
        }
        self.audio.known_outputs.push(name.to_string());
        true
    }
}

fn check_cutoff(field: &'static str, value: f32) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            message: format!("{value} is outside (0, 1]"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.matching.alias_cutoff, 0.86);
        assert_eq!(config.matching.device_cutoff, 0.6);
        assert_eq!(config.weather.default_city, "Newark, NJ");
        assert_eq!(config.browser.preference, Browser::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_file(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.weather.default_city = "Pune".to_string();
        config.browser.preference = Browser::Firefox;
        config.add_known_output("OnePlus Buds Z2");

        let saved = config.save(path.to_str()).unwrap();
        assert_eq!(saved, path);

        let loaded = Config::load_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[weather]\nunits = \"metric\"\n").unwrap();

        let config = Config::load_file(&path).unwrap();
        assert_eq!(config.weather.units, Units::Metric);
        assert_eq!(config.weather.default_city, "Newark, NJ");
        assert_eq!(config.matching, MatchingOptions::default());
    }

    #[test]
    fn test_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[matching\nalias_cutoff = ").unwrap();

        assert!(matches!(Config::load_file(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (env_vars::DEFAULT_CITY, "Hyderabad"),
            (env_vars::UNITS, "imperial"),
            (env_vars::BROWSER, "google chrome"),
            (env_vars::WAKE_WORD, ""),
            (env_vars::ALIAS_CUTOFF, "0.9"),
        ]);

        let mut config = Config::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.weather.default_city, "Hyderabad");
        assert_eq!(config.weather.units, Units::Imperial);
        assert_eq!(config.browser.preference, Browser::Chrome);
        assert_eq!(config.matching.wake_word, "");
        assert_eq!(config.matching.alias_cutoff, 0.9);
    }

    #[test]
    fn test_bad_env_values_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|name| match name {
            env_vars::UNITS => Some("kelvin".to_string()),
            env_vars::ALIAS_CUTOFF => Some("high".to_string()),
            _ => None,
        });
        assert_eq!(config.weather.units, Units::Auto);
        assert_eq!(config.matching.alias_cutoff, 0.86);
    }

    #[test]
    fn test_validate_cutoff() {
        let mut config = Config::default();
        config.matching.alias_cutoff = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "matching.alias_cutoff", .. })
        ));

        config.matching.alias_cutoff = 1.0;
        config.matching.device_cutoff = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_add_known_output_dedupes() {
        let mut config = Config::default();
        assert!(config.add_known_output("LG TV"));
        assert!(!config.add_known_output("lg tv"));
        assert!(!config.add_known_output("  "));
        assert_eq!(config.audio.known_outputs, vec!["LG TV".to_string()]);
    }

    #[test]
    fn test_browser_names() {
        assert_eq!(Browser::from_name("Microsoft Edge"), Some(Browser::Edge));
        assert_eq!(Browser::from_name("default"), Some(Browser::Default));
        assert_eq!(Browser::from_name("netscape"), None);
    }
}
