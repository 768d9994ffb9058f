use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

pub(crate) static READER_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("reader-scroll"));
/// Poll interval while a scroll write is waiting to settle.
pub(crate) const FLUSH_POLL_MS: u64 = 50;
pub(crate) const TITLE_FONT_SIZE_PX: f32 = 28.0;
pub(crate) const CARD_TITLE_FONT_SIZE_PX: f32 = 18.0;
pub(crate) const META_FONT_SIZE_PX: f32 = 13.0;
pub(crate) const READER_MAX_WIDTH_PX: f32 = 860.0;
