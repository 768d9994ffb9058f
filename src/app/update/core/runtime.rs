use super::super::super::messages::Message;
use super::super::super::state::{App, READER_SCROLL_ID};
use super::super::Effect;
use crate::ingest::load_documents;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;
use std::path::PathBuf;
use tracing::info;

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::PickFiles => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .set_title("Add plain-text books")
                        .add_filter("Text", &["txt", "TXT"])
                        .pick_files()
                        .await
                        .map(|handles| {
                            handles
                                .iter()
                                .map(|handle| handle.path().to_path_buf())
                                .collect::<Vec<PathBuf>>()
                        })
                        .unwrap_or_default()
                },
                Message::FilesPicked,
            ),
            Effect::LoadFiles(paths) => {
                self.library.loading += 1;
                info!(count = paths.len(), "Dispatching file load task");
                Task::perform(
                    async move {
                        let mut documents = Vec::new();
                        let mut failures = Vec::new();
                        for result in load_documents(&paths) {
                            match result {
                                Ok(document) => documents.push(document),
                                Err(failure) => failures.push(failure),
                            }
                        }
                        Message::FilesLoaded {
                            documents,
                            failures,
                        }
                    },
                    |message| message,
                )
            }
            Effect::RestoreScroll(offset) => scrollable::scroll_to(
                READER_SCROLL_ID.clone(),
                AbsoluteOffset {
                    x: 0.0,
                    y: offset as f32,
                },
            ),
            Effect::CloseWindow(_id) => iced::exit(),
            Effect::QuitSafely => {
                self.shelf.flush();
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileHovered(_)) => return Some(Message::FileHovered),
        Event::Window(window::Event::FilesHoveredLeft) => return Some(Message::FilesHoveredLeft),
        Event::Window(window::Event::FileDropped(path)) => {
            return Some(Message::FileDropped(path));
        }
        _ => {}
    }
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
