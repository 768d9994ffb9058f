use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use tracing::{debug, info};

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::PickFiles => effects.push(Effect::PickFiles),
            Message::FilesPicked(paths) => self.handle_files_selected(paths, &mut effects),
            Message::OpenPathInputChanged(path) => self.library.open_path_input = path,
            Message::OpenPathRequested => self.handle_open_path_requested(&mut effects),
            Message::FileHovered => self.library.drag_over = true,
            Message::FilesHoveredLeft => {
                self.library.drag_over = false;
                self.handle_drop_finished(&mut effects);
            }
            Message::FileDropped(path) => self.handle_file_dropped(path),
            Message::FilesLoaded {
                documents,
                failures,
            } => self.handle_files_loaded(documents, failures),
            Message::DismissFailures => self.library.failures.clear(),
            Message::SortAlphabetical => self.handle_sort_alphabetical(),
            Message::OpenBook(id) => self.handle_open_book(&id, &mut effects),
            Message::RequestRemove(id) => {
                debug!(%id, "Remove requested");
                self.library.pending_remove = Some(id);
            }
            Message::ConfirmRemove => self.handle_confirm_remove(),
            Message::CancelRemove => self.library.pending_remove = None,
            Message::BackToLibrary => self.handle_back_to_library(),
            Message::FontSizeChanged(size) => self.handle_font_size_changed(size),
            Message::ThemeSelected(theme) => self.handle_theme_selected(theme),
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::Scrolled {
                offset_y,
                content_height,
                viewport_height,
            } => self.handle_scrolled(offset_y, content_height, viewport_height),
            Message::Tick(now) => {
                self.handle_drop_finished(&mut effects);
                self.handle_tick(now);
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::CloseRequested(id) => {
                info!("Window close requested; flushing state");
                self.shelf.flush();
                effects.push(Effect::CloseWindow(id));
            }
            Message::SafeQuit => {
                info!("Safe quit requested");
                effects.push(Effect::QuitSafely);
            }
        }

        effects
    }
}
