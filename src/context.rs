//! Application Context
//!
//! Shared, read-only settings provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::EditorConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<EditorConfig>,
}

impl AppContext {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    /// Snapshot of the editor configuration
    pub fn config(&self) -> EditorConfig {
        self.config.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
