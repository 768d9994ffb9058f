//! Global reader preferences: font size and theme.

use crate::storage::{FONT_SIZE_KEY, KeyValueStore, THEME_KEY, set_logged};
use crate::theme::Theme;
use tracing::{debug, warn};

pub const MIN_FONT_SIZE: u32 = 14;
pub const MAX_FONT_SIZE: u32 = 32;
pub const DEFAULT_FONT_SIZE: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub font_size: u32,
    pub theme: Theme,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            theme: Theme::Light,
        }
    }
}

impl Preferences {
    /// Read both preferences, falling back to defaults for missing or
    /// unparseable values.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let theme = match store.get(THEME_KEY) {
            Some(raw) => Theme::parse(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "Unknown saved theme, using light");
                Theme::Light
            }),
            None => Theme::Light,
        };
        Self {
            font_size: load_font_size(store),
            theme,
        }
    }

    pub fn set_font_size(&mut self, size: u32, store: &mut dyn KeyValueStore) {
        let clamped = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        if clamped == self.font_size && store.get(FONT_SIZE_KEY).is_some() {
            return;
        }
        debug!(old = self.font_size, new = clamped, "Font size changed");
        self.font_size = clamped;
        set_logged(store, FONT_SIZE_KEY, &clamped.to_string());
    }

    pub fn set_theme(&mut self, theme: Theme, store: &mut dyn KeyValueStore) {
        debug!(theme = %theme, "Theme changed");
        self.theme = theme;
        set_logged(store, THEME_KEY, theme.as_str());
    }

    /// Advance to the next theme in ring order and persist it.
    pub fn cycle_theme(&mut self, store: &mut dyn KeyValueStore) -> Theme {
        let next = self.theme.next();
        self.set_theme(next, store);
        next
    }
}

/// The saved font size, clamped into the slider range.
pub fn load_font_size(store: &dyn KeyValueStore) -> u32 {
    match store.get(FONT_SIZE_KEY) {
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(size) => size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE),
            Err(err) => {
                warn!(value = %raw, "Invalid saved font size: {err}");
                DEFAULT_FONT_SIZE
            }
        },
        None => DEFAULT_FONT_SIZE,
    }
}
