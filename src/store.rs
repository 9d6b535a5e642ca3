//! Panel State Stores
//!
//! Uses Leptos reactive_stores for fine-grained reactivity in the two admin
//! panels that edit nested records (settings and site content).

use leptos::prelude::*;
use reactive_stores::Store;

use crate::domain::content::{self, ColorPalette, ContentSection, ContentTab};
use crate::domain::settings::{Settings, SettingsTab};
use crate::error::AppResult;

/// Settings form state
#[derive(Clone, Debug, Default, Store)]
pub struct SettingsState {
    pub settings: Settings,
    /// Set by any edit, cleared by save
    pub dirty: bool,
    pub tab: SettingsTab,
}

pub type SettingsStore = Store<SettingsState>;

/// Content editor state
#[derive(Clone, Debug, Store)]
pub struct ContentState {
    pub sections: Vec<ContentSection>,
    pub palette: ColorPalette,
    pub tab: ContentTab,
}

impl Default for ContentState {
    fn default() -> Self {
        Self {
            sections: content::seed_sections(),
            palette: ColorPalette::default(),
            tab: ContentTab::default(),
        }
    }
}

pub type ContentStore = Store<ContentState>;

// ========================
// Store Helper Functions
// ========================

/// Apply an edit to the settings and mark the form dirty
pub fn store_update_settings(store: &SettingsStore, f: impl FnOnce(&mut Settings)) {
    f(&mut *store.settings().write());
    store.dirty().set(true);
}

/// Persist the settings. There is no backend, so this logs the record.
///
/// Returns the JSON that was logged.
pub fn store_save_settings(store: &SettingsStore) -> AppResult<String> {
    let settings = store.settings().get_untracked();
    let json = settings.to_json()?;
    log::info!("[SETTINGS] saved: {}", json);
    crate::commands::console_dump("[SETTINGS]", &settings)?;
    store.dirty().set(false);
    Ok(json)
}

pub fn store_toggle_edit(store: &ContentStore, slug: &str) {
    content::toggle_edit(&mut store.sections().write(), slug);
}

pub fn store_edit_content(store: &ContentStore, slug: &str, text: String) {
    content::edit_content(&mut store.sections().write(), slug, text);
}

pub fn store_save_content(store: &ContentStore, slug: &str, text: String) {
    content::save_content(&mut store.sections().write(), slug, text);
    log::info!("[CONTENT] saved section {}", slug);
}

pub fn store_update_color(store: &ContentStore, key: &str, value: String) {
    if let Err(e) = ColorPalette::set(&mut *store.palette().write(), key, value) {
        log::warn!("[CONTENT] {}", e);
    }
}

/// Close every open editor and log the full content state
pub fn store_publish_content(store: &ContentStore) -> AppResult<()> {
    for section in store.sections().write().iter_mut() {
        section.is_editing = false;
    }
    let sections = store.sections().get_untracked();
    let palette = store.palette().get_untracked();
    log::info!("[CONTENT] published {} sections", sections.len());
    crate::commands::console_dump("[CONTENT] sections", &sections)?;
    crate::commands::console_dump("[CONTENT] palette", &palette)?;
    Ok(())
}
