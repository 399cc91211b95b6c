use crate::error::{MarksError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for marks, stored in the scope directory as config.json
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarksConfig {
    /// Command used by `marks open`; falls back to $BROWSER, then the
    /// platform opener.
    #[serde(default)]
    pub browser: Option<String>,
}

impl MarksConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MarksError::Io)?;
        let config: MarksConfig =
            serde_json::from_str(&content).map_err(MarksError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MarksError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MarksError::Serialization)?;
        fs::write(config_path, content).map_err(MarksError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "browser" => Some(self.browser.clone().unwrap_or_else(|| "(unset)".to_string())),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "browser" => {
                self.browser = Some(value.to_string());
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
