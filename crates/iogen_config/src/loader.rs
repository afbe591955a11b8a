//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::Path;

/// File name of the project configuration inside a project directory.
pub const CONFIG_FILE_NAME: &str = "iogen.toml";

/// Loads and validates an `iogen.toml` configuration from a project directory.
///
/// Reads `<project_dir>/iogen.toml`, parses it, and validates required fields.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    load_config_file(&project_dir.join(CONFIG_FILE_NAME))
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_from_str(&content)
}

/// Parses and validates an `iogen.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and configuration values are consistent.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project.name.is_empty() {
        return Err(ConfigError::Missing("project.name"));
    }
    if config.tables.signals.is_none() && config.tables.pins.is_none() {
        return Err(ConfigError::Missing("tables.signals or tables.pins"));
    }
    for (key, value) in [
        ("tables.signals", config.tables.signals.as_deref()),
        ("tables.pins", config.tables.pins.as_deref()),
        ("outputs.xdc", Some(config.outputs.xdc.as_str())),
        ("outputs.vhdl", Some(config.outputs.vhdl.as_str())),
    ] {
        if value.is_some_and(|v| v.trim().is_empty()) {
            return Err(ConfigError::BlankPath(key));
        }
    }
    Ok(())
}
