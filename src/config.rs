//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Maximum form column width when none is configured
const DEFAULT_FORM_WIDTH: u16 = 80;

/// User configuration for the TUI
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Maximum width of the centered form column
    pub form_width: Option<u16>,
    /// Show the key-hint status bar
    pub show_key_hints: Option<bool>,
}

#[allow(dead_code)]
impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "feedback", "feedback-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Form column width, falling back to the default
    pub fn form_width(&self) -> u16 {
        self.form_width.unwrap_or(DEFAULT_FORM_WIDTH)
    }

    /// Whether to draw the key-hint status bar (on unless disabled)
    pub fn show_key_hints(&self) -> bool {
        self.show_key_hints.unwrap_or(true)
    }
}
