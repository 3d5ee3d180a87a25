/*!
 * OS Configuration
 * Persisted personalization and account settings
 */

use crate::core::serde::is_none;
use crate::core::Position;
use crate::storage::{keys, SlotStore};
use log::warn;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

pub const DEFAULT_WALLPAPER: &str =
    "https://images.unsplash.com/photo-1477346611705-65d1883cee1e?auto=format&fit=crop&w=2564";
pub const DEFAULT_ACCENT: &str = "#4f46e5";

/// Visual theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Persisted OS configuration record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsConfig {
    pub wallpaper: String,
    pub theme: Theme,
    pub username: String,
    #[serde(skip_serializing_if = "is_none", default)]
    pub password: Option<String>,
    pub accent_color: String,
    /// Last-dropped pixel position per desktop icon id
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub icon_positions: HashMap<String, Position>,
}

impl Default for OsConfig {
    fn default() -> Self {
        Self {
            wallpaper: DEFAULT_WALLPAPER.to_string(),
            theme: Theme::Dark,
            username: "User".to_string(),
            password: None,
            accent_color: DEFAULT_ACCENT.to_string(),
            icon_positions: HashMap::new(),
        }
    }
}

/// Slot-backed configuration store: loaded once at session start,
/// written back on every change. A corrupt slot falls back to defaults.
pub struct ConfigStore {
    slots: Arc<dyn SlotStore>,
    state: RwLock<OsConfig>,
}

impl ConfigStore {
    pub fn open(slots: Arc<dyn SlotStore>) -> Self {
        let state = match slots.get(keys::CONFIG) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("os config corrupted, falling back to defaults: {e}");
                OsConfig::default()
            }),
            None => OsConfig::default(),
        };
        Self {
            slots,
            state: RwLock::new(state),
        }
    }

    /// Current configuration snapshot
    #[must_use]
    pub fn get(&self) -> OsConfig {
        self.state.read().clone()
    }

    /// Apply a mutation and persist the result
    pub fn update(&self, mutate: impl FnOnce(&mut OsConfig)) {
        let mut state = self.state.write();
        mutate(&mut state);
        match serde_json::to_string(&*state) {
            Ok(json) => self.slots.put(keys::CONFIG, &json),
            Err(e) => warn!("os config serialization failed: {e}"),
        }
    }

    pub fn set_wallpaper(&self, url: impl Into<String>) {
        let url = url.into();
        self.update(|c| c.wallpaper = url);
    }

    pub fn set_theme(&self, theme: Theme) {
        self.update(|c| c.theme = theme);
    }

    pub fn set_accent_color(&self, color: impl Into<String>) {
        let color = color.into();
        self.update(|c| c.accent_color = color);
    }

    /// Record where a desktop icon was dropped
    pub fn set_icon_position(&self, icon_id: impl Into<String>, position: Position) {
        let icon_id = icon_id.into();
        self.update(|c| {
            c.icon_positions.insert(icon_id, position);
        });
    }

    #[must_use]
    pub fn icon_position(&self, icon_id: &str) -> Option<Position> {
        self.state.read().icon_positions.get(icon_id).copied()
    }

    /// Check credentials and record the session user.
    ///
    /// An empty stored password accepts anything; the first successful
    /// login with a password adopts it as the account password.
    pub fn verify_login(&self, username: &str, password: &str) -> bool {
        {
            let state = self.state.read();
            if let Some(stored) = state.password.as_deref() {
                if !stored.is_empty() && stored != password {
                    return false;
                }
            }
        }
        self.update(|c| {
            c.username = username.to_string();
            let unset = c.password.as_deref().map_or(true, str::is_empty);
            if unset && !password.is_empty() {
                c.password = Some(password.to_string());
            }
        });
        true
    }
}
