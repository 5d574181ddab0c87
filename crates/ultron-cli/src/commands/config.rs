//! Config command - manage configuration
//!
//! Setters edit the file itself, so environment overrides never leak into
//! what gets saved.

use anyhow::Result;
use console::{style, Term};
use std::path::PathBuf;
use ultron_core::{Browser, Config};

pub fn show(config: &Config) -> Result<()> {
    let term = Term::stdout();

    term.write_line(&format!("{}", style("Ultron Configuration").bold()))?;
    term.write_line("")?;

    term.write_line(&format!(
        "Wake word:        {}",
        style(display_or(&config.matching.wake_word, "(disabled)")).cyan()
    ))?;
    term.write_line(&format!(
        "Alias cutoff:     {}",
        style(config.matching.alias_cutoff).cyan()
    ))?;
    term.write_line(&format!(
        "Device cutoff:    {}",
        style(config.matching.device_cutoff).cyan()
    ))?;
    term.write_line(&format!(
        "Browser:          {}",
        style(config.browser.preference.as_str()).cyan()
    ))?;

    term.write_line("")?;
    term.write_line(&format!("{}", style("Weather:").dim()))?;
    term.write_line(&format!("  Default city:   {}", config.weather.default_city))?;
    term.write_line(&format!("  Units:          {}", config.weather.units.as_str()))?;

    term.write_line("")?;
    term.write_line(&format!("{}", style("Levels:").dim()))?;
    term.write_line(&format!("  Volume step:    {}", config.audio.volume_step))?;
    term.write_line(&format!("  Brightness step: {}", config.audio.brightness_step))?;

    term.write_line("")?;
    term.write_line(&format!("{}", style("Capabilities:").dim()))?;
    for (name, enabled) in [
        ("System control", config.capabilities.system_control),
        ("Calendar", config.capabilities.calendar),
        ("Assistant", config.capabilities.assistant),
    ] {
        let status = if enabled {
            style("enabled").green()
        } else {
            style("disabled").red()
        };
        term.write_line(&format!("  {:<15} {}", format!("{name}:"), status))?;
    }

    if !config.audio.known_outputs.is_empty() {
        term.write_line("")?;
        term.write_line(&format!("{}", style("Known Audio Outputs:").dim()))?;
        for name in &config.audio.known_outputs {
            term.write_line(&format!("  - {}", name))?;
        }
    }

    Ok(())
}

pub fn show_path(config_path: Option<&str>) -> Result<()> {
    let term = Term::stdout();
    let path = resolve_path(config_path)?;
    term.write_line(&format!("{}", path.display()))?;
    Ok(())
}

pub fn init(config_path: Option<&str>, force: bool) -> Result<()> {
    let term = Term::stdout();
    let path = resolve_path(config_path)?;

    if path.exists() && !force {
        term.write_line(&format!(
            "{} Config already exists at {} (use --force to overwrite)",
            style("✗").red(),
            path.display()
        ))?;
        return Ok(());
    }

    let saved = Config::default().save(config_path)?;
    term.write_line(&format!(
        "{} Wrote default config to {}",
        style("✓").green(),
        saved.display()
    ))?;
    Ok(())
}

pub fn set_city(config_path: Option<&str>, city: &str) -> Result<()> {
    let term = Term::stdout();
    let city = city.trim();
    if city.is_empty() {
        term.write_line(&format!("{} City cannot be empty", style("✗").red()))?;
        return Ok(());
    }

    let mut config = load_for_edit(config_path)?;
    config.weather.default_city = city.to_string();
    config.save(config_path)?;

    term.write_line(&format!(
        "{} Default city set to: {}",
        style("✓").green(),
        city
    ))?;
    Ok(())
}

pub fn set_cutoff(config_path: Option<&str>, cutoff: f32) -> Result<()> {
    let term = Term::stdout();

    let mut config = load_for_edit(config_path)?;
    config.matching.alias_cutoff = cutoff;
    if let Err(e) = config.validate() {
        term.write_line(&format!("{} {}", style("✗").red(), e))?;
        return Ok(());
    }
    config.save(config_path)?;

    term.write_line(&format!(
        "{} Alias cutoff set to: {}",
        style("✓").green(),
        cutoff
    ))?;
    term.write_line(&format!(
        "{} Run 'ultron eval' to check the corpus still passes",
        style("ℹ").blue()
    ))?;
    Ok(())
}

pub fn set_browser(config_path: Option<&str>, name: &str) -> Result<()> {
    let term = Term::stdout();

    let Some(browser) = Browser::from_name(name) else {
        term.write_line(&format!(
            "{} Unknown browser '{}'. Available: default, chrome, edge, firefox, brave, opera",
            style("✗").red(),
            name
        ))?;
        return Ok(());
    };

    let mut config = load_for_edit(config_path)?;
    config.browser.preference = browser;
    config.save(config_path)?;

    term.write_line(&format!(
        "{} Browser set to: {}",
        style("✓").green(),
        browser.as_str()
    ))?;
    Ok(())
}

pub fn add_output(config_path: Option<&str>, name: &str) -> Result<()> {
    let term = Term::stdout();

    let mut config = load_for_edit(config_path)?;
    if !config.add_known_output(name) {
        term.write_line(&format!(
            "{} '{}' is already known (or empty)",
            style("ℹ").blue(),
            name.trim()
        ))?;
        return Ok(());
    }
    config.save(config_path)?;

    term.write_line(&format!(
        "{} Added audio output: {}",
        style("✓").green(),
        name.trim()
    ))?;
    Ok(())
}

fn resolve_path(config_path: Option<&str>) -> Result<PathBuf> {
    Ok(match config_path {
        Some(p) => PathBuf::from(p),
        None => Config::default_config_path()?,
    })
}

fn load_for_edit(config_path: Option<&str>) -> Result<Config> {
    Ok(Config::load_file(&resolve_path(config_path)?)?)
}

fn display_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ultron_core::config::DEFAULT_DEVICE_CUTOFF;

    fn temp_config() -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml").to_string_lossy().into_owned();
        (dir, path)
    }

    #[test]
    fn test_init_writes_defaults() {
        let (_dir, path) = temp_config();
        init(Some(&path), false).unwrap();

        let config = Config::load_file(std::path::Path::new(&path)).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.matching.device_cutoff, DEFAULT_DEVICE_CUTOFF);
    }

    #[test]
    fn test_setters_round_trip() {
        let (_dir, path) = temp_config();
        set_city(Some(&path), "  Hyderabad ").unwrap();
        set_browser(Some(&path), "Firefox").unwrap();
        add_output(Some(&path), "OnePlus Buds Z2").unwrap();
        add_output(Some(&path), "oneplus buds z2").unwrap();

        let config = Config::load_file(std::path::Path::new(&path)).unwrap();
        assert_eq!(config.weather.default_city, "Hyderabad");
        assert_eq!(config.browser.preference, Browser::Firefox);
        assert_eq!(config.audio.known_outputs, vec!["OnePlus Buds Z2".to_string()]);
    }

    #[test]
    fn test_invalid_values_not_saved() {
        let (_dir, path) = temp_config();
        set_cutoff(Some(&path), 1.5).unwrap();
        set_browser(Some(&path), "netscape").unwrap();
        assert!(!std::path::Path::new(&path).exists());

        set_cutoff(Some(&path), 0.9).unwrap();
        let config = Config::load_file(std::path::Path::new(&path)).unwrap();
        assert_eq!(config.matching.alias_cutoff, 0.9);
    }
}
