//! Entry point for the offline webnovel reader.
//!
//! - Load user configuration from `conf/config.toml`.
//! - Open the persistent store and the bookshelf it backs.
//! - Launch the GUI, handing over any `.txt` paths from the command line.

mod app;
mod config;
mod debounce;
mod document;
mod ingest;
mod library;
mod preferences;
mod session;
mod shelf;
mod storage;
mod text_utils;
mod theme;

use crate::app::run_app;
use crate::config::load_config;
use crate::ingest::filter_plain_text;
use crate::shelf::Bookshelf;
use crate::storage::FileStore;
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const CONFIG_PATH: &str = "conf/config.toml";

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let config = load_config(Path::new(CONFIG_PATH));
    set_log_level(reload_handle, config.log_level.as_filter_str());

    let store = FileStore::open(&config.storage_path());
    info!(
        storage = %store.path().display(),
        level = %config.log_level,
        "Starting webnovel reader"
    );

    let shelf = Bookshelf::open(Box::new(store), &config);
    info!(
        books = shelf.library().len(),
        theme = %shelf.preferences().theme,
        font_size = shelf.preferences().font_size,
        "Loaded library"
    );

    let initial_paths = parse_args();
    run_app(shelf, config, initial_paths).context("Failed to start the GUI")?;
    Ok(())
}

/// Command-line arguments are paths to ingest; anything that is not a `.txt`
/// file is skipped with a warning.
fn parse_args() -> Vec<PathBuf> {
    let paths: Vec<PathBuf> = env::args_os().skip(1).map(PathBuf::from).collect();
    let offered = paths.len();
    let accepted = filter_plain_text(paths);
    if accepted.len() < offered {
        warn!(
            skipped = offered - accepted.len(),
            "Ignoring command-line arguments that are not .txt files"
        );
    }
    accepted
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    info!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    if env::var_os("RUST_LOG").is_some() {
        info!("RUST_LOG is set; ignoring config log level");
        return;
    }
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
