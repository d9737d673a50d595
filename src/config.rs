//! Demo scenario configuration.
//!
//! Every field is optional in the TOML file; missing fields fall back to the
//! built-in scenario (ticker `APPL`, observers A and B, prices 500 then 528).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub ticker: String,
    /// Subscribed in this order; the first one is dropped before the second price.
    pub observers: Vec<String>,
    pub first_price: f64,
    pub second_price: f64,
    /// Also append every update to this file when set.
    pub message_log: Option<PathBuf>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            ticker: "APPL".to_string(),
            observers: vec!["Stock Observer A".to_string(), "Stock Observer B".to_string()],
            first_price: 500.0,
            second_price: 528.0,
            message_log: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn parse_config(content: &str) -> Result<ScenarioConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load a scenario from a TOML file.
pub fn load_config(path: &Path) -> Result<ScenarioConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}
