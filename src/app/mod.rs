mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use crate::shelf::Bookshelf;
use iced::{Size, window};
use std::path::PathBuf;

/// Launch the reader window over an opened bookshelf. `initial_paths` are
/// ingested once the window is up.
pub fn run_app(
    shelf: Bookshelf,
    config: AppConfig,
    initial_paths: Vec<PathBuf>,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        exit_on_close_request: false,
        ..window::Settings::default()
    };

    iced::application(App::title, App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(App::theme)
        .run_with(move || App::bootstrap(shelf, config, initial_paths))
}
