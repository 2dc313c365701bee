//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`INTAKE_*`)
//! 3. Config file (`--config`, or the default location)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use intake_adapters::schedule::{
    DEFAULT_CLOSING, DEFAULT_HORIZON_DAYS, DEFAULT_OPENING, DEFAULT_SLOT_MINUTES,
    RollingWindowScheduler,
};

/// File name used by `intake init --local`.
pub const LOCAL_CONFIG_FILE: &str = ".intake.toml";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Pre-filled values for the booking form.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Booking window and business hours.
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Service code pre-selected when none is given.
    pub service: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Days ahead of today that remain bookable.
    pub horizon_days: i64,
    /// First bookable time of day, HH:MM.
    pub opening: String,
    /// Last bookable time of day, HH:MM (inclusive).
    pub closing: String,
    /// Minutes between consecutive slots.
    pub slot_minutes: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults { service: None },
            output: OutputConfig {
                no_color: false,
                format: "human".into(),
            },
            schedule: ScheduleConfig {
                horizon_days: DEFAULT_HORIZON_DAYS,
                opening: DEFAULT_OPENING.into(),
                closing: DEFAULT_CLOSING.into(),
                slot_minutes: DEFAULT_SLOT_MINUTES,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then `INTAKE_*` env vars.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("INTAKE").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.intake.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "intake", "intake")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Build the scheduler described by the `[schedule]` section.
    pub fn scheduler(&self) -> anyhow::Result<RollingWindowScheduler> {
        let opening = parse_time(&self.schedule.opening)?;
        let closing = parse_time(&self.schedule.closing)?;

        Ok(RollingWindowScheduler::new(
            self.schedule.horizon_days,
            opening,
            closing,
            self.schedule.slot_minutes,
        )?)
    }
}

fn parse_time(raw: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|e| anyhow::anyhow!("invalid time of day '{raw}' (expected HH:MM): {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_matches_studio_hours() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.schedule.horizon_days, 90);
        assert_eq!(cfg.schedule.opening, "09:00");
        assert_eq!(cfg.schedule.closing, "17:00");
        assert_eq!(cfg.schedule.slot_minutes, 30);
    }

    #[test]
    fn default_scheduler_builds() {
        let cfg = AppConfig::default();
        assert!(cfg.scheduler().is_ok());
    }

    #[test]
    fn bad_opening_time_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.schedule.opening = "nine".into();
        assert!(cfg.scheduler().is_err());
    }

    #[test]
    fn load_without_file_returns_defaults() {
        // Point at a path that certainly does not exist so a developer's
        // real config cannot leak into the test.
        let path = PathBuf::from("/nonexistent/intake-test/config.toml");
        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn load_merges_file_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[schedule]\nhorizon_days = 30\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.schedule.horizon_days, 30);
        // Untouched sections keep their defaults.
        assert_eq!(cfg.schedule.slot_minutes, 30);
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
