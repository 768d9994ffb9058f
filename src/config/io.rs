use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

const SECTION_NAMES: [&str; 5] = ["logging", "storage", "window", "reading", "keys"];

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

/// Parse either the sectioned layout (`[logging]`, `[reading]`, ...) or a flat
/// key list, then clamp values into their supported ranges.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let value: toml::Table = toml::from_str(contents).context("config is not valid TOML")?;
    let sectioned = SECTION_NAMES.iter().any(|name| value.contains_key(*name));

    let mut config = if sectioned {
        let tables: ConfigTables =
            toml::from_str(contents).context("failed to read sectioned config")?;
        AppConfig::from(tables)
    } else {
        toml::from_str::<AppConfig>(contents).context("failed to read flat config")?
    };
    clamp_config(&mut config);
    Ok(config)
}

/// Render the config in the sectioned layout.
#[cfg(test)]
pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(&ConfigTables::from(config)).context("failed to serialize config")
}

fn clamp_config(config: &mut AppConfig) {
    fn normalize_key_binding(value: &mut String, fallback: String) {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            *value = fallback;
        } else {
            *value = normalized;
        }
    }

    if config.storage_path.trim().is_empty() {
        config.storage_path = super::defaults::default_storage_path();
    }
    config.window_width = config.window_width.clamp(320.0, 7680.0);
    config.window_height = config.window_height.clamp(240.0, 4320.0);
    config.scroll_settle_ms = config.scroll_settle_ms.clamp(50, 10_000);
    config.words_per_minute = config.words_per_minute.max(1);
    config.chars_per_page = config.chars_per_page.max(1);
    normalize_key_binding(&mut config.key_back_to_library, "escape".to_string());
    normalize_key_binding(&mut config.key_toggle_theme, "ctrl+t".to_string());
    normalize_key_binding(&mut config.key_safe_quit, "ctrl+q".to_string());
    normalize_key_binding(&mut config.key_open_files, "ctrl+o".to_string());
}
