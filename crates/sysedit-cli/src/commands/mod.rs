pub mod config;
pub mod replay;
pub mod shiplog;

use std::path::Path;

use anyhow::{Context, Result};
use sysedit_core::config::EditorConfig;

/// Load an editor config from TOML, or fall back to the defaults.
pub fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    let Some(path) = path else {
        return Ok(EditorConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: EditorConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}
