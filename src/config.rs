//! Editor Configuration
//!
//! Optional JSON read from `<script type="application/json" id="todo-config">`
//! in the host page. Any missing field falls back to its default.

use std::fmt;

use serde::Deserialize;
use tracing::Level;

/// Id of the element holding the JSON configuration
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

/// Common result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration loading errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Host page not reachable (no window or document)
    Missing(String),
    /// Configuration element present but not valid JSON
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(msg) => write!(f, "Missing: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Add form submit button
    pub add_label: String,
    /// Add form input placeholder
    pub placeholder: String,
    /// Per-row edit button
    pub edit_label: String,
    /// Per-row delete button
    pub delete_label: String,
    /// Modal confirm button
    pub confirm_label: String,
    /// Modal close button
    pub close_label: String,
    /// Pointer travel before a mousedown turns into a drag
    pub drag_threshold_px: i32,
    /// `trace`, `debug`, `info`, `warn` or `error`
    pub log_level: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            add_label: "EKLE".to_string(),
            placeholder: String::new(),
            edit_label: "✎".to_string(),
            delete_label: "🗑".to_string(),
            confirm_label: "Değiştir".to_string(),
            close_label: "Close".to_string(),
            drag_threshold_px: 5,
            log_level: "info".to_string(),
        }
    }
}

impl EditorConfig {
    /// Parsed log level, `INFO` if unrecognised
    pub fn log_level(&self) -> Level {
        self.log_level.trim().parse().unwrap_or(Level::INFO)
    }
}

pub fn parse_config(json: &str) -> ConfigResult<EditorConfig> {
    if json.trim().is_empty() {
        return Ok(EditorConfig::default());
    }
    serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Load configuration from the host page. No config element means defaults.
pub fn load_from_document() -> ConfigResult<EditorConfig> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| ConfigError::Missing("no document".to_string()))?;

    match document.get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(element) => parse_config(&element.text_content().unwrap_or_default()),
        None => Ok(EditorConfig::default()),
    }
}
