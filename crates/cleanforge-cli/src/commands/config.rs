//! `cleanforge config` — read and write configuration values.

use crate::{
    cli::{ConfigCommands, OutputFormat},
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
            // Validate the key before touching the file.
            get_config_value(&config, &key)?;
            write_config_value(config, &key, &value)?;
            output.success(&format!("Set {key} = {value}"))?;
        }

        ConfigCommands::List => match output.format() {
            OutputFormat::Json => {
                // JSON goes straight to stdout so it stays parseable even in
                // non-TTY pipes.
                let json =
                    serde_json::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                println!("{json}");
            }
            _ => {
                output.header("Current Configuration:")?;
                let serialised =
                    toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                output.print(&serialised)?;
            }
        },

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.database" => Ok(config.defaults.database.clone().unwrap_or_default()),
        "defaults.orm" => Ok(config.defaults.orm.clone().unwrap_or_default()),
        "defaults.manager" => Ok(config.defaults.manager.clone().unwrap_or_default()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        "install.skip" => Ok(config.install.skip.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

fn write_config_value(mut config: AppConfig, key: &str, value: &str) -> CliResult<()> {
    let parse_bool = |value: &str| {
        value.parse::<bool>().map_err(|_| CliError::ConfigError {
            message: format!("'{value}' is not a boolean"),
            source: None,
        })
    };

    match key {
        "defaults.database" => config.defaults.database = Some(value.to_string()),
        "defaults.orm" => config.defaults.orm = Some(value.to_string()),
        "defaults.manager" => config.defaults.manager = Some(value.to_string()),
        "output.no_color" => config.output.no_color = parse_bool(value)?,
        "output.format" => config.output.format = value.to_string(),
        "install.skip" => config.install.skip = parse_bool(value)?,
        _ => unreachable!("validated by get_config_value"),
    }

    let toml = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    let path = AppConfig::config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create config directory '{}'", parent.display()),
            source: e,
        })?;
    }
    std::fs::write(&path, &toml).map_err(|e| CliError::IoError {
        message: format!("Failed to write config to '{}'", path.display()),
        source: e,
    })?;

    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.database").unwrap(), "mongo");
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
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn get_install_skip_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "install.skip").unwrap(), "false");
    }
}
