use serde::{Deserialize, Serialize};

const SETTINGS_KEY: &str = "settings";

/// Client configuration, kept as JSON in `localStorage["settings"]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Prefix for API paths. Empty talks to the page's own origin.
    pub api_base_url: String,
    pub currency_symbol: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            currency_symbol: "₹".to_string(),
        }
    }
}

impl AppSettings {
    pub fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(settings) => Some(settings),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unreadable stored settings");
                None
            }
        }
    }
}

pub fn load_settings() -> AppSettings {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item(SETTINGS_KEY) {
                if let Some(settings) = AppSettings::from_json(&raw) {
                    return settings;
                }
            }
        }
    }
    AppSettings::default()
}
