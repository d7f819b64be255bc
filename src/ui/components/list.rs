//! Book list renderer.
//!
//! Two columns, TITLE and AUTHOR, plus the "show more" control below them.

use crate::ui::helpers::{self, position_cursor, print_padded, title_column_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, ShowMoreInfo};

/// Gap between the two columns.
const COLUMN_GAP: usize = 2;

/// Renders the bold column headers at `row`. Returns the next free row.
pub fn render_list_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let title_width = title_column_width(cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print_padded("TITLE", title_width + COLUMN_GAP);
    print_padded("AUTHOR", cols.saturating_sub(title_width + COLUMN_GAP));
    print!("{}", theme.restore());
    row + 1
}

/// Renders every row in `items` starting at `row`. Returns the next free row.
pub fn render_list_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_list_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one book row, filling the full width so the selection bar is solid.
fn render_list_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let title_width = title_column_width(cols);

    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    let title_len = item.title.chars().count();
    print!("{}", " ".repeat((title_width + COLUMN_GAP).saturating_sub(title_len)));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print_padded(&item.author, cols.saturating_sub(title_width + COLUMN_GAP));

    print!("{}", theme.restore());
    row + 1
}

/// Renders the "Show more (N)" control at `row`, dimmed when disabled.
pub fn render_show_more(row: usize, show_more: &ShowMoreInfo, theme: &Theme, cols: usize) -> usize {
    let label = format!("[ {} ]", show_more.label);
    let label_len = label.chars().count();
    let padding = cols.saturating_sub(label_len) / 2;

    position_cursor(row, 1);
    if show_more.enabled {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.accent));
    } else {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", " ".repeat(padding));
    print!("{label}");
    print!("{}", theme.restore());
    row + 1
}
