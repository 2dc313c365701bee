//! `intake config` - read and write configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            let mut updated = config;
            set_config_value(&mut updated, &key, &value)?;
            write_config(&updated, &AppConfig::config_path())?;
            output.success(&format!("Set {key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.service" => Ok(config.defaults.service.clone().unwrap_or_default()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        "schedule.horizon_days" => Ok(config.schedule.horizon_days.to_string()),
        "schedule.opening" => Ok(config.schedule.opening.clone()),
        "schedule.closing" => Ok(config.schedule.closing.clone()),
        "schedule.slot_minutes" => Ok(config.schedule.slot_minutes.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> CliResult<()> {
    let parse_int = |value: &str| {
        value.parse::<i64>().map_err(|_| CliError::ConfigError {
            message: format!("'{value}' is not a number (key '{key}')"),
            source: None,
        })
    };

    match key {
        "defaults.service" => config.defaults.service = Some(value.to_string()),
        "output.no_color" => {
            config.output.no_color = value.parse().map_err(|_| CliError::ConfigError {
                message: format!("'{value}' is not a boolean (key '{key}')"),
                source: None,
            })?;
        }
        "output.format" => config.output.format = value.to_string(),
        "schedule.horizon_days" => config.schedule.horizon_days = parse_int(value)?,
        "schedule.opening" => config.schedule.opening = value.to_string(),
        "schedule.closing" => config.schedule.closing = value.to_string(),
        "schedule.slot_minutes" => config.schedule.slot_minutes = parse_int(value)?,
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            });
        }
    }

    // Reject schedule values the scheduler would refuse at startup.
    if key.starts_with("schedule.") {
        config.scheduler().map_err(|e| CliError::ConfigError {
            message: e.to_string(),
            source: None,
        })?;
    }

    Ok(())
}

fn write_config(config: &AppConfig, path: &std::path::Path) -> CliResult<()> {
    let toml = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create config directory '{}'", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(path, toml).map_err(|e| CliError::IoError {
        message: format!("Failed to write config to '{}'", path.display()),
        source: e,
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "schedule.horizon_days").unwrap(),
            "90"
        );
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn set_parses_numbers() {
        let mut cfg = AppConfig::default();
        set_config_value(&mut cfg, "schedule.horizon_days", "60").unwrap();
        assert_eq!(cfg.schedule.horizon_days, 60);

        assert!(set_config_value(&mut cfg, "schedule.horizon_days", "soon").is_err());
    }

    #[test]
    fn set_rejects_schedule_the_scheduler_would_refuse() {
        let mut cfg = AppConfig::default();
        assert!(set_config_value(&mut cfg, "schedule.slot_minutes", "0").is_err());
        assert!(set_config_value(&mut cfg, "schedule.opening", "25:99").is_err());
        assert!(set_config_value(&mut cfg, "schedule.horizon_days", "1000000000").is_err());
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut cfg = AppConfig::default();
        set_config_value(&mut cfg, "defaults.service", "fitness").unwrap();
        assert_eq!(get_config_value(&cfg, "defaults.service").unwrap(), "fitness");
    }

    #[test]
    fn write_config_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        write_config(&AppConfig::default(), &path).unwrap();
        assert!(path.exists());
    }
}
