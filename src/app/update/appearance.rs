use super::super::state::App;
use crate::theme::Theme;
use tracing::info;

impl App {
    pub(super) fn handle_font_size_changed(&mut self, size: u32) {
        self.shelf.set_font_size(size);
    }

    pub(super) fn handle_theme_selected(&mut self, theme: Theme) {
        if theme != self.shelf.preferences().theme {
            self.shelf.set_theme(theme);
        }
    }

    pub(super) fn handle_toggle_theme(&mut self) {
        let theme = self.shelf.cycle_theme();
        info!(%theme, "Toggled theme");
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::*;
    use crate::config::AppConfig;
    use crate::preferences::{MAX_FONT_SIZE, MIN_FONT_SIZE};
    use crate::shelf::Bookshelf;
    use crate::storage::{FONT_SIZE_KEY, MemoryStore, THEME_KEY};
    use iced::keyboard::{Key, Modifiers};

    fn build_test_app() -> App {
        let config = AppConfig::default();
        let shelf = Bookshelf::open(Box::new(MemoryStore::new()), &config);
        let (app, _task) = App::bootstrap(shelf, config, Vec::new());
        app
    }

    #[test]
    fn font_slider_is_clamped_and_saved() {
        let mut app = build_test_app();
        app.reduce(Message::FontSizeChanged(MAX_FONT_SIZE + 8));
        assert_eq!(app.shelf.preferences().font_size, MAX_FONT_SIZE);
        app.reduce(Message::FontSizeChanged(0));
        assert_eq!(app.shelf.preferences().font_size, MIN_FONT_SIZE);
        assert_eq!(
            app.shelf.store().get(FONT_SIZE_KEY),
            Some(MIN_FONT_SIZE.to_string())
        );
    }

    #[test]
    fn theme_toggle_cycles_light_dark_sepia() {
        let mut app = build_test_app();
        let mut seen = Vec::new();
        for _ in 0..3 {
            app.reduce(Message::ToggleTheme);
            seen.push(app.shelf.preferences().theme);
        }
        assert_eq!(seen, [Theme::Dark, Theme::Sepia, Theme::Light]);
        assert_eq!(app.shelf.store().get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn picking_a_theme_persists_it() {
        let mut app = build_test_app();
        app.reduce(Message::ThemeSelected(Theme::Sepia));
        assert_eq!(app.shelf.store().get(THEME_KEY).as_deref(), Some("sepia"));
        assert!(matches!(app.theme(), iced::Theme::Custom(_)));
    }

    #[test]
    fn theme_shortcut_reaches_the_reducer() {
        let mut app = build_test_app();
        app.reduce(Message::KeyPressed {
            key: Key::Character("t".into()),
            modifiers: Modifiers::CTRL,
        });
        assert_eq!(app.shelf.preferences().theme, Theme::Dark);
    }
}
