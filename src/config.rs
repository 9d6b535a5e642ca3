//! Site Configuration
//!
//! Defaults are compiled in. `index.html` may override any field with a
//! `<script id="site-config" type="application/json">` block.

use leptos::prelude::*;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;

use crate::error::AppResult;

/// DOM id of the optional JSON override block
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// International number used for wa.me and tel: links (digits only)
    pub whatsapp_number: String,
    /// Human-readable phone shown on the site
    pub display_phone: String,
    /// Paths starting with this prefix render the admin console
    pub admin_path_prefix: String,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Space left above an anchor target for the fixed navbar
    pub anchor_offset_px: f64,
    pub anchor_scroll_ms: f64,
    pub wheel_accelerator: bool,
    pub wheel_scroll_ms: u32,
    /// Artificial processing delay before the booking link opens
    pub submit_delay_ms: u32,
    pub success_banner_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "905314918035".to_string(),
            display_phone: "0531 491 80 35".to_string(),
            admin_path_prefix: "/admin".to_string(),
            log_level: "info".to_string(),
            anchor_offset_px: 80.0,
            anchor_scroll_ms: 1200.0,
            wheel_accelerator: false,
            wheel_scroll_ms: 800,
            submit_delay_ms: 1000,
            success_banner_ms: 1500,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the override block from the page, if there is one
    pub fn load() -> AppResult<Self> {
        let script = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.dyn_into::<web_sys::HtmlScriptElement>().ok());

        match script.map(|s| s.text()) {
            Some(Ok(text)) if !text.trim().is_empty() => Self::from_json(&text),
            _ => Ok(Self::default()),
        }
    }

    /// Unknown level names fall back to `Info`
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Whether `path` belongs to the admin console
    pub fn is_admin_path(&self, path: &str) -> bool {
        path.starts_with(&self.admin_path_prefix)
    }
}

/// Get the site config from context
pub fn use_config() -> SiteConfig {
    expect_context::<SiteConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.whatsapp_number, "905314918035");
        assert_eq!(config.log_level(), LevelFilter::Info);
        assert!(!config.wheel_accelerator);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{"logLevel": "debug", "submitDelayMs": 0}"#).unwrap();
        assert_eq!(config.log_level(), LevelFilter::Debug);
        assert_eq!(config.submit_delay_ms, 0);
        assert_eq!(config.admin_path_prefix, "/admin");
        assert_eq!(config.success_banner_ms, 1500);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(SiteConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = SiteConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_admin_path_is_a_raw_prefix_test() {
        let config = SiteConfig::default();
        assert!(config.is_admin_path("/admin"));
        assert!(config.is_admin_path("/admin/settings"));
        assert!(config.is_admin_path("/administrator"));
        assert!(!config.is_admin_path("/"));
        assert!(!config.is_admin_path("/hizmetler/admin"));
    }
}
