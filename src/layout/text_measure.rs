//! Text Measurement
//!
//! Text dimensions in terminal cells. Widths come from `unicode-width`:
//! ASCII is 1 cell, CJK and most emoji 2, combining marks 0.

use unicode_width::UnicodeWidthStr;

/// Display width of the widest line, in cells.
pub fn string_width(s: &str) -> u16 {
    s.lines()
        .map(|line| line.width())
        .max()
        .unwrap_or(0)
        .min(u16::MAX as usize) as u16
}

/// Number of rows `text` occupies when hard-wrapped at `available_width`.
///
/// Empty text takes no rows; a zero width is treated as unbounded.
pub fn measure_text_height(text: &str, available_width: u16) -> u16 {
    if text.is_empty() {
        return 0;
    }

    let rows: usize = text
        .lines()
        .map(|line| {
            let width = line.width();
            if available_width == 0 || width == 0 {
                1
            } else {
                width.div_ceil(available_width as usize)
            }
        })
        .sum();

    rows.clamp(1, u16::MAX as usize) as u16
}
