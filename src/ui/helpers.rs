//! Shared rendering utilities.
//!
//! Cursor positioning, match highlighting and the text measuring helpers the
//! view model uses to fit titles, authors and descriptions into columns.
//! All widths are counted in characters, not bytes.

use crate::ui::theme::Theme;

/// Narrowest the title column gets.
const MIN_TITLE_WIDTH: usize = 12;

/// Widest the title column gets on large terminals.
const MAX_TITLE_WIDTH: usize = 56;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Width of the TITLE column for a terminal `cols` wide.
///
/// Roughly 60% of the width, clamped to a readable range.
#[must_use]
pub fn title_column_width(cols: usize) -> usize {
    (cols * 3 / 5).clamp(MIN_TITLE_WIDTH, MAX_TITLE_WIDTH)
}

/// Shortens `text` to at most `width` characters, ending in `...` when cut.
///
/// # Examples
///
/// ```
/// use shelfie::ui::helpers::truncate;
///
/// assert_eq!(truncate("Moby-Dick", 20), "Moby-Dick");
/// assert_eq!(truncate("Twenty Thousand Leagues", 10), "Twenty ...");
/// assert_eq!(truncate("Emma", 2), "Em");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }

    let kept: String = text.chars().take(width - 3).collect();
    format!("{kept}...")
}

/// Greedy word wrap to lines of at most `width` characters.
///
/// Words longer than a line are split.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Prints `text` with highlighted character ranges.
///
/// Ranges are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. Selected rows skip highlighting so the selection colours
/// stay readable.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", theme.restore());

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Prints `text` padded with spaces to exactly `width` characters.
///
/// Longer text is truncated.
pub fn print_padded(text: &str, width: usize) {
    let text = truncate(text, width);
    let len = text.chars().count();
    print!("{text}{}", " ".repeat(width.saturating_sub(len)));
}
