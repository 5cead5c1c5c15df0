//! Application settings with an optional `tour.toml` override.
//!
//! The page ships with a hardcoded sale-start instant; a config file in
//! the platform config directory can override it (and the ticket URL)
//! without rebuilding, e.g. when the sale start slips.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, TimeZone};
use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

const CONFIG_FILE: &str = "tour.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// On-disk shape. Every field is optional; absent fields keep their
/// built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    /// RFC 3339 timestamp with offset, e.g. "2026-01-20T12:00:00+03:00".
    target: Option<DateTime<FixedOffset>>,
    ticket_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// The instant ticket sales open.
    pub target: DateTime<FixedOffset>,
    /// Where «КУПИТЬ БИЛЕТ» leads once sales are open, if anywhere yet.
    pub ticket_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target: default_target(),
            ticket_url: None,
        }
    }
}

/// Sale start: January 20, 2026 at 12:00:00 Moscow time (UTC+3).
pub fn default_target() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(3 * 3600)
        .unwrap()
        .with_ymd_and_hms(2026, 1, 20, 12, 0, 0)
        .unwrap()
}

impl Settings {
    /// Load settings, falling back to defaults when there is no config
    /// file or it cannot be used. A broken file is logged, not fatal.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(Some(settings)) => settings,
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Ignoring settings file: {e:#}");
                Self::default()
            }
        }
    }

    /// Read the platform config file if one exists.
    pub fn load() -> Result<Option<Self>> {
        let Some(path) = Self::config_path() else {
            log::debug!("No config directory available on this platform");
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        let settings = Self::load_from_path(&path)
            .with_context(|| format!("invalid settings at {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(Some(settings))
    }

    pub fn load_from_path(path: &Path) -> std::result::Result<Self, SettingsError> {
        let raw = std::fs::read_to_string(path)?;
        let file: SettingsFile = toml::from_str(&raw)?;
        let defaults = Self::default();
        Ok(Self {
            target: file.target.unwrap_or(defaults.target),
            ticket_url: file.ticket_url.or(defaults.ticket_url),
        })
    }

    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "kolixx-tour").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn default_target_is_nine_utc() {
        let target = default_target();
        assert_eq!(
            target.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2026, 1, 20, 9, 0, 0).unwrap()
        );
    }

    #[test]
    fn empty_file_keeps_defaults() {
        let file: SettingsFile = toml::from_str("").unwrap();
        assert!(file.target.is_none());
        assert!(file.ticket_url.is_none());
    }

    #[test]
    fn target_override_parses_offset() {
        let file: SettingsFile =
            toml::from_str("target = \"2026-03-01T18:30:00+05:00\"").unwrap();
        let target = file.target.unwrap();
        assert_eq!(target.offset().local_minus_utc(), 5 * 3600);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<SettingsFile>("tarjet = \"oops\"").is_err());
    }
}
