//! Greedy word wrap against the static metric tables.

use crate::layout::font_metrics::FontMetricTable;

/// Breaks `text` into lines no wider than `max_width_pt` at `size_pt`.
///
/// Whitespace runs collapse to a single space. A word wider than the whole line is
/// split at character boundaries so no line ever overflows. Empty or whitespace-only
/// text returns no lines.
pub fn wrap_text(
    text: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width_pt: f32,
) -> Vec<String> {
    let max_width = max_width_pt / size_pt;
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in text.split_whitespace() {
        for piece in split_oversized(word, metrics, max_width) {
            let piece_w = metrics.measure_str(piece);

            if current.is_empty() {
                current.push_str(piece);
                current_width = piece_w;
            } else if current_width + metrics.space_width + piece_w > max_width {
                lines.push(std::mem::take(&mut current));
                current.push_str(piece);
                current_width = piece_w;
            } else {
                current.push(' ');
                current.push_str(piece);
                current_width += metrics.space_width + piece_w;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Splits a single word into pieces that each fit `max_width` (em units).
fn split_oversized<'a>(word: &'a str, metrics: &FontMetricTable, max_width: f32) -> Vec<&'a str> {
    if metrics.measure_str(word) <= max_width {
        return vec![word];
    }

    let mut pieces = Vec::new();
    let mut start = 0usize;
    let mut width = 0.0_f32;
    for (idx, ch) in word.char_indices() {
        let mut buf = [0u8; 4];
        let ch_w = metrics.measure_str(ch.encode_utf8(&mut buf));
        if idx > start && width + ch_w > max_width {
            pieces.push(&word[start..idx]);
            start = idx;
            width = 0.0;
        }
        width += ch_w;
    }
    pieces.push(&word[start..]);
    pieces
}
