//! Reading statistics and small text formatting helpers.

/// Number of whitespace-delimited, non-empty tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time in whole minutes, rounded up.
pub fn reading_minutes(words: usize, words_per_minute: usize) -> usize {
    words.div_ceil(words_per_minute.max(1))
}

/// Naive page estimate: character count over a fixed page size, rounded up.
pub fn page_estimate(text: &str, chars_per_page: usize) -> usize {
    text.chars().count().div_ceil(chars_per_page.max(1))
}

/// Scroll progress as a percentage in `[0, 100]`. Content that fits in the
/// viewport reports 0.
pub fn scroll_progress(scroll_top: f32, scroll_height: f32, client_height: f32) -> f32 {
    let scrollable = scroll_height - client_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Title shown for a document: the file name without a trailing `.txt`.
pub fn display_title(name: &str) -> &str {
    name.strip_suffix(".txt").unwrap_or(name)
}

/// `12345` -> `"12,345"`.
pub fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Byte size rendered as kilobytes with one decimal, e.g. `"3.9 KB"`.
pub fn format_size_kb(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}
