//! Search form panel renderer.

use super::{draw_panel, PanelArea};
use crate::app::modes::FormField;
use crate::ui::helpers::{position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchFormInfo;

/// Rows the panel occupies, frame included.
pub const SEARCH_PANEL_HEIGHT: usize = 5;

/// Width of the field label column.
const LABEL_WIDTH: usize = 9;

/// Renders the search form as a framed panel starting at `row`.
///
/// ```text
/// ┌─ Search ───────────────────────┐
/// │ Title:   dune_                 │
/// │ Author:  < All Authors >       │
/// │ Genre:   < All Genres >        │
/// └────────────────────────────────┘
/// ```
///
/// The focused field's label is drawn in the accent colour. Returns the next
/// free row.
pub fn render_search_panel(row: usize, form: &SearchFormInfo, theme: &Theme, cols: usize) -> usize {
    let area = draw_panel(row, SEARCH_PANEL_HEIGHT, " Search ", theme, cols);

    let title_value = if form.focus == FormField::Title {
        format!("{}_", form.title)
    } else {
        form.title.clone()
    };

    render_field(&area, 0, "Title:", &title_value, form.focus == FormField::Title, theme);
    render_field(
        &area,
        1,
        "Author:",
        &format!("< {} >", form.author),
        form.focus == FormField::Author,
        theme,
    );
    render_field(
        &area,
        2,
        "Genre:",
        &format!("< {} >", form.genre),
        form.focus == FormField::Genre,
        theme,
    );

    row + SEARCH_PANEL_HEIGHT
}

fn render_field(area: &PanelArea, line: usize, label: &str, value: &str, focused: bool, theme: &Theme) {
    position_cursor(area.top + line, area.left);
    if focused {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.accent));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!(" ");
    print_padded(label, LABEL_WIDTH);
    print!("{}", theme.restore());
    print_padded(value, area.width.saturating_sub(LABEL_WIDTH + 1));
}
