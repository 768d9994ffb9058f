use iced::window;
use std::path::PathBuf;

mod appearance;
mod core;
mod library;
mod reader;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug)]
pub(super) enum Effect {
    PickFiles,
    LoadFiles(Vec<PathBuf>),
    RestoreScroll(u32),
    CloseWindow(window::Id),
    QuitSafely,
}
