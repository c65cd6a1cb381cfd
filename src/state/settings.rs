// Viewer settings persisted to localStorage
use pinch_scale::PinchConfig;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "ps_viewer_settings";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub prevent_default: bool,
    pub show_grid: bool,
    pub config: PinchConfig,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            prevent_default: true,
            show_grid: true,
            config: PinchConfig::default(),
        }
    }
}

impl ViewerSettings {
    pub fn from_json(raw: &str) -> Option<Self> {
        let settings: ViewerSettings = serde_json::from_str(raw).ok()?;
        match settings.config.validate() {
            Ok(()) => Some(settings),
            Err(err) => {
                log::warn!("ignoring stored settings: {err}");
                None
            }
        }
    }

    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(STORAGE_KEY) {
                    if let Some(settings) = Self::from_json(&raw) {
                        return settings;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(raw) = serde_json::to_string(self) {
                    let _ = store.set_item(STORAGE_KEY, &raw);
                }
            }
        }
    }

    pub fn clear() {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                let _ = store.remove_item(STORAGE_KEY);
            }
        }
    }
}
