use super::messages::Message;
use super::state::{
    App, CARD_TITLE_FONT_SIZE_PX, META_FONT_SIZE_PX, READER_MAX_WIDTH_PX, READER_SCROLL_ID,
    TITLE_FONT_SIZE_PX,
};
use crate::document::Document;
use crate::preferences::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::session::ReaderSession;
use crate::text_utils::{format_size_kb, format_thousands};
use crate::theme::Theme;
use iced::alignment::Vertical;
use iced::widget::text::LineHeight;
use iced::widget::{
    Column, button, column, container, horizontal_space, pick_list, progress_bar, row, scrollable,
    slider, text, text_input,
};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        match self.shelf.reader() {
            Some(reader) => self.reader_view(reader),
            None => self.library_view(),
        }
    }

    fn library_view(&self) -> Element<'_, Message> {
        let theme = self.shelf.preferences().theme;
        let library = self.shelf.library();

        let header = row![
            column![
                text("Offline Webnovel Reader").size(TITLE_FONT_SIZE_PX),
                text("Plain-text stories, kept on this machine").size(META_FONT_SIZE_PX),
            ]
            .spacing(4),
            horizontal_space(),
            button(text(format!("{} {}", theme.icon(), theme)))
                .style(button::secondary)
                .on_press(Message::ToggleTheme),
        ]
        .spacing(12)
        .align_y(Vertical::Center);

        let drop_hint = if self.library.drag_over {
            "Release to add the files to your library"
        } else {
            "Drop .txt files on this window, or pick them from disk"
        };
        let path_input = text_input("Path to a .txt file", &self.library.open_path_input)
            .on_input(Message::OpenPathInputChanged)
            .on_submit(Message::OpenPathRequested)
            .width(Length::Fill);
        let upload = container(
            column![
                text(drop_hint),
                row![
                    button("Choose files").on_press(Message::PickFiles),
                    path_input,
                    button("Add").on_press(Message::OpenPathRequested),
                ]
                .spacing(8)
                .align_y(Vertical::Center),
            ]
            .spacing(10),
        )
        .padding(16)
        .width(Length::Fill)
        .style(if self.library.drag_over {
            container::bordered_box
        } else {
            container::rounded_box
        });

        let mut content = column![header, upload].spacing(16);

        if self.library.is_loading() {
            content = content.push(text("Loading files...").size(META_FONT_SIZE_PX));
        }

        if !self.library.failures.is_empty() {
            let failures = self
                .library
                .failures
                .iter()
                .fold(Column::new().spacing(4), |col, failure| {
                    col.push(text(format!("Could not add {failure}")).size(META_FONT_SIZE_PX))
                });
            content = content.push(
                row![
                    failures.width(Length::Fill),
                    button("Dismiss")
                        .style(button::text)
                        .on_press(Message::DismissFailures),
                ]
                .spacing(8),
            );
        }

        if library.len() > 1 {
            let sort_status = if library.auto_sort() {
                "Auto-sort enabled"
            } else {
                ""
            };
            content = content.push(
                row![
                    text(format!("{} books", library.len())),
                    horizontal_space(),
                    text(sort_status).size(META_FONT_SIZE_PX),
                    button("Organize A-Z").on_press(Message::SortAlphabetical),
                ]
                .spacing(12)
                .align_y(Vertical::Center),
            );
        }

        let shelf: Element<'_, Message> = if library.is_empty() {
            container(text("Your library is empty. Add a .txt file to start reading."))
                .padding(24)
                .center_x(Length::Fill)
                .into()
        } else {
            scrollable(
                library
                    .documents()
                    .iter()
                    .fold(Column::new().spacing(10), |col, document| {
                        col.push(self.book_card(document))
                    }),
            )
            .height(Length::Fill)
            .into()
        };

        container(content.push(shelf))
            .padding(20)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn book_card<'a>(&'a self, document: &'a Document) -> Element<'a, Message> {
        let id = document.id();
        let meta = format!(
            "{} · about {} pages",
            format_size_kb(document.size),
            document.page_estimate(self.shelf.chars_per_page())
        );

        let actions: Element<'a, Message> = if self.library.pending_remove.as_ref() == Some(&id) {
            row![
                text("Remove this book?"),
                button("Remove")
                    .style(button::danger)
                    .on_press(Message::ConfirmRemove),
                button("Keep").on_press(Message::CancelRemove),
            ]
            .spacing(8)
            .align_y(Vertical::Center)
            .into()
        } else {
            row![
                button("Read").on_press(Message::OpenBook(id.clone())),
                button("Remove")
                    .style(button::secondary)
                    .on_press(Message::RequestRemove(id)),
            ]
            .spacing(8)
            .into()
        };

        container(
            row![
                column![
                    text(document.title()).size(CARD_TITLE_FONT_SIZE_PX),
                    text(meta).size(META_FONT_SIZE_PX),
                ]
                .spacing(4)
                .width(Length::Fill),
                actions,
            ]
            .spacing(12)
            .align_y(Vertical::Center),
        )
        .padding(12)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
    }

    fn reader_view<'a>(&'a self, reader: &'a ReaderSession) -> Element<'a, Message> {
        let prefs = self.shelf.preferences();
        let stats = format!(
            "{} words · {} min read",
            format_thousands(reader.word_count()),
            reader.reading_minutes()
        );

        let header = row![
            button("Back to library").on_press(Message::BackToLibrary),
            column![
                text(reader.title()).size(CARD_TITLE_FONT_SIZE_PX + 4.0),
                text(stats).size(META_FONT_SIZE_PX),
            ]
            .spacing(2),
            horizontal_space(),
            text(format!("{:.0}%", reader.progress())),
        ]
        .spacing(12)
        .align_y(Vertical::Center);

        let controls = row![
            text(format!("Font size: {}px", prefs.font_size)),
            slider(
                MIN_FONT_SIZE as f32..=MAX_FONT_SIZE as f32,
                prefs.font_size as f32,
                |value| Message::FontSizeChanged(value.round() as u32),
            )
            .width(Length::Fixed(220.0)),
            horizontal_space(),
            text("Theme"),
            pick_list(Theme::ALL, Some(prefs.theme), Message::ThemeSelected),
        ]
        .spacing(10)
        .align_y(Vertical::Center);

        let progress = progress_bar(0.0..=100.0, reader.progress()).height(Length::Fixed(4.0));

        let body = scrollable(
            container(
                container(
                    text(reader.body())
                        .size(prefs.font_size as f32)
                        .line_height(LineHeight::Relative(1.7))
                        .width(Length::Fill),
                )
                .max_width(READER_MAX_WIDTH_PX)
                .padding(24),
            )
            .center_x(Length::Fill),
        )
        .id(READER_SCROLL_ID.clone())
        .on_scroll(|viewport| Message::Scrolled {
            offset_y: viewport.absolute_offset().y,
            content_height: viewport.content_bounds().height,
            viewport_height: viewport.bounds().height,
        })
        .height(Length::Fill);

        column![header, controls, progress, body]
            .spacing(12)
            .padding(16)
            .into()
    }
}
