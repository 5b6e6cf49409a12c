use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::panel::TEMPO_OUT;

/// Panel configuration: which ports get a display binding.
///
/// The stock panel mirrors only the tempo readout; a config file can bind
/// further control ports of the plugin (`delay`, `mix`, `decay`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub displays: Vec<DisplayBinding>,
}

/// One entry of the `displays` list: the symbol of a port to mirror.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayBinding {
    pub port: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            displays: vec![DisplayBinding {
                port: TEMPO_OUT.to_string(),
            }],
        }
    }
}

impl PanelConfig {
    /// Load a panel configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read panel config: {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("failed to parse panel config: {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "test_config.rs"]
mod tests;
