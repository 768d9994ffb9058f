mod constants;
mod ui;

use crate::config::AppConfig;
use crate::shelf::Bookshelf;
use iced::Task;
use std::path::PathBuf;
use tracing::info;

use super::messages::Message;
use super::update::Effect;

pub(crate) use constants::*;
pub(in crate::app) use ui::LibraryState;

/// Application state: the persistent bookshelf plus view-only state.
pub struct App {
    pub(super) shelf: Bookshelf,
    pub(super) config: AppConfig,
    pub(super) library: LibraryState,
}

impl App {
    /// Build the app and the startup work: restoring the scroll position of a
    /// reopened book and ingesting any files passed on the command line.
    pub fn bootstrap(
        shelf: Bookshelf,
        config: AppConfig,
        initial_paths: Vec<PathBuf>,
    ) -> (App, Task<Message>) {
        let mut app = App {
            shelf,
            config,
            library: LibraryState::default(),
        };

        let mut effects = Vec::new();
        if let Some(reader) = app.shelf.reader() {
            info!(title = reader.title(), "Resuming last book");
            if reader.restored_offset() > 0 {
                effects.push(Effect::RestoreScroll(reader.restored_offset()));
            }
        }
        if !initial_paths.is_empty() {
            info!(count = initial_paths.len(), "Loading files from command line");
            effects.push(Effect::LoadFiles(initial_paths));
        }

        let tasks: Vec<Task<Message>> = effects
            .into_iter()
            .map(|effect| app.run_effect(effect))
            .collect();
        (app, Task::batch(tasks))
    }

    pub fn title(&self) -> String {
        match self.shelf.reader() {
            Some(reader) => format!("{} - Offline Webnovel Reader", reader.title()),
            None => String::from("Offline Webnovel Reader"),
        }
    }

    /// Whether the periodic tick must run: a scroll write is settling or a
    /// drop burst is waiting to be ingested.
    pub(in crate::app) fn needs_tick(&self) -> bool {
        self.shelf.has_pending_write() || !self.library.dropped.is_empty()
    }

    pub fn theme(&self) -> iced::Theme {
        self.shelf.preferences().theme.into()
    }
}
