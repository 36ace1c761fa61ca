//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::PlotConfig;
use perfplot_model::is_identifier;
use std::path::Path;

/// File name looked up inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "perfplot.toml";

/// Loads and validates `perfplot.toml` from a directory.
pub fn load_config(dir: &Path) -> Result<PlotConfig, ConfigError> {
    let content = std::fs::read_to_string(dir.join(CONFIG_FILE_NAME))?;
    load_config_from_str(&content)
}

/// Parses and validates a `perfplot.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<PlotConfig, ConfigError> {
    let config: PlotConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &PlotConfig) -> Result<(), ConfigError> {
    let render = &config.render;
    if render.binding.is_empty() {
        return Err(ConfigError::MissingField("render.binding".to_string()));
    }
    if !is_identifier(&render.binding) {
        return Err(ConfigError::ValidationError(format!(
            "render.binding '{}' is not an identifier",
            render.binding
        )));
    }
    // The project name is appended, so only the prefix characters are checked.
    if !render.project_prefix.is_empty() && !is_identifier(&render.project_prefix) {
        return Err(ConfigError::ValidationError(format!(
            "render.project_prefix '{}' is not an identifier",
            render.project_prefix
        )));
    }
    Ok(())
}
