pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_storage_path() -> String {
    ".cache/storage.json".to_string()
}

pub(crate) fn default_window_width() -> f32 {
    1024.0
}

pub(crate) fn default_window_height() -> f32 {
    768.0
}

pub(crate) fn default_scroll_settle_ms() -> u64 {
    500
}

pub(crate) fn default_words_per_minute() -> usize {
    200
}

pub(crate) fn default_chars_per_page() -> usize {
    2000
}

pub(crate) fn default_key_back_to_library() -> String {
    "escape".to_string()
}

pub(crate) fn default_key_toggle_theme() -> String {
    "ctrl+t".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "ctrl+q".to_string()
}

pub(crate) fn default_key_open_files() -> String {
    "ctrl+o".to_string()
}
