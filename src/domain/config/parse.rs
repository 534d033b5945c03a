//! Pure parse/validate for stack configuration (`devstack.toml`).

use crate::domain::{AppError, StackConfig};

/// Parse and validate stack configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<StackConfig, AppError> {
    let config: StackConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Render a configuration back to TOML.
pub fn render_config(config: &StackConfig) -> Result<String, AppError> {
    Ok(toml::to_string_pretty(config)?)
}
