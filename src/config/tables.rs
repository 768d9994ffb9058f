use super::defaults;
use super::models::{AppConfig, LogLevel};
use serde::Deserialize;

/// On-disk layout of `config.toml`, grouped into sections.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    storage: StorageConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    reading: ReadingConfig,
    #[serde(default)]
    keys: KeysConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            log_level: tables.logging.log_level,
            storage_path: tables.storage.path,
            window_width: tables.window.width,
            window_height: tables.window.height,
            scroll_settle_ms: tables.reading.scroll_settle_ms,
            words_per_minute: tables.reading.words_per_minute,
            chars_per_page: tables.reading.chars_per_page,
            key_back_to_library: tables.keys.back_to_library,
            key_toggle_theme: tables.keys.toggle_theme,
            key_safe_quit: tables.keys.safe_quit,
            key_open_files: tables.keys.open_files,
        }
    }
}

#[cfg(test)]
impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            logging: LoggingConfig {
                log_level: config.log_level,
            },
            storage: StorageConfig {
                path: config.storage_path.clone(),
            },
            window: WindowConfig {
                width: config.window_width,
                height: config.window_height,
            },
            reading: ReadingConfig {
                scroll_settle_ms: config.scroll_settle_ms,
                words_per_minute: config.words_per_minute,
                chars_per_page: config.chars_per_page,
            },
            keys: KeysConfig {
                back_to_library: config.key_back_to_library.clone(),
                toggle_theme: config.key_toggle_theme.clone(),
                safe_quit: config.key_safe_quit.clone(),
                open_files: config.key_open_files.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct StorageConfig {
    #[serde(default = "defaults::default_storage_path")]
    path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            path: defaults::default_storage_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ReadingConfig {
    #[serde(default = "defaults::default_scroll_settle_ms")]
    scroll_settle_ms: u64,
    #[serde(default = "defaults::default_words_per_minute")]
    words_per_minute: usize,
    #[serde(default = "defaults::default_chars_per_page")]
    chars_per_page: usize,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        ReadingConfig {
            scroll_settle_ms: defaults::default_scroll_settle_ms(),
            words_per_minute: defaults::default_words_per_minute(),
            chars_per_page: defaults::default_chars_per_page(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_back_to_library")]
    back_to_library: String,
    #[serde(default = "defaults::default_key_toggle_theme")]
    toggle_theme: String,
    #[serde(default = "defaults::default_key_safe_quit")]
    safe_quit: String,
    #[serde(default = "defaults::default_key_open_files")]
    open_files: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            back_to_library: defaults::default_key_back_to_library(),
            toggle_theme: defaults::default_key_toggle_theme(),
            safe_quit: defaults::default_key_safe_quit(),
            open_files: defaults::default_key_open_files(),
        }
    }
}
