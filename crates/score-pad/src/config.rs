use std::fs;

use serde::{Deserialize, Serialize};

/// Application configuration loaded from score-pad.toml
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Path to the score document. A CLI argument takes precedence.
    #[serde(default)]
    pub document: Option<String>,
}

impl Config {
    /// Load config from the working directory, or use defaults.
    pub fn load() -> Self {
        if let Ok(content) = fs::read_to_string("score-pad.toml") {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }

        log::debug!("Using default config");
        Self::default()
    }
}
