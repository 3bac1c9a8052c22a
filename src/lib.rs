//! Drag-and-drop To-Do List
//!
//! Single-page list editor: add items, reorder them by dragging, rename them
//! in a modal and delete them. All state lives in memory.
//!
//! - models, items, editor: pure state and operations
//! - store: reactive wrapper used by the components
//! - components: Leptos views

pub mod models;
pub mod items;
pub mod editor;
pub mod config;
pub mod logging;
pub mod context;
pub mod store;
pub mod components;
pub mod app;

use leptos::prelude::*;

use app::App;
use config::EditorConfig;

/// Load configuration, install logging and mount the app on `<body>`
pub fn run() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load_from_document() {
        Ok(config) => (config, None),
        Err(e) => (EditorConfig::default(), Some(e)),
    };

    logging::init(config.log_level());
    if let Some(e) = config_error {
        tracing::warn!("falling back to default configuration: {}", e);
    }
    tracing::info!("mounting list editor");

    mount_to_body(move || view! { <App config=config /> });
}
