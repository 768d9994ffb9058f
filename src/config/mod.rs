//! Configuration loading for the reader.
//!
//! Ambient settings (logging, where the key-value store lives, window size,
//! reading-speed constants and key bindings) are loaded from
//! `conf/config.toml` if present. Any missing or invalid entries fall back to
//! defaults so the UI can still launch. Reader preferences such as theme and
//! font size are not configuration; they live in the key-value store.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::load_config;
pub use models::{AppConfig, LogLevel};
