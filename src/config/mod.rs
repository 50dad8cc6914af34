pub mod types;

use std::path::Path;

use crate::error::{EngineError, Result};
use types::EngineConfig;

pub fn load_config(path: &Path) -> Result<EngineConfig> {
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(EngineConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        EngineError::Config(format!(
            "failed to read config file {}: {e}",
            path.display()
        ))
    })?;
    if content.trim().is_empty() {
        return Ok(EngineConfig::default());
    }
    let config: EngineConfig = serde_yml::from_str(&content)?;
    Ok(config)
}
