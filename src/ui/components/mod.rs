//! Composable UI component renderers.
//!
//! Each component prints one part of the screen with ANSI escapes and returns
//! the next free row where that makes sense.
//!
//! # Components
//!
//! - [`header`]: Title bar with the revealed/matching counts
//! - [`footer`]: Keybinding hints for the active overlay
//! - [`list`]: Book table (TITLE, AUTHOR) and the "show more" control
//! - [`empty`]: "No results" message
//! - [`search`]: Search form panel
//! - [`settings`]: Day/night picker panel
//! - [`detail`]: Book preview panel
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Column Headers]
//! [Book Rows | No results message]
//! [Show more (N)]
//! [Border]
//! [Footer]
//! ```
//!
//! Panels (search, settings, preview) are boxes drawn over the list area.

mod detail;
mod empty;
mod footer;
mod header;
mod list;
mod search;
mod settings;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use detail::render_detail_panel;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::{render_list_headers, render_list_rows, render_show_more};
use search::render_search_panel;
use settings::render_settings_panel;

/// Columns left free on each side of a panel.
const PANEL_MARGIN: usize = 4;

/// Row where the first book is drawn.
const LIST_TOP: usize = 5;

/// Interior of a drawn panel, 1-indexed terminal coordinates.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PanelArea {
    pub top: usize,
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

/// Paints every cell with the theme background.
fn fill_background(theme: &Theme, rows: usize, cols: usize) {
    let blank = " ".repeat(cols);
    for row in 1..=rows {
        position_cursor(row, 1);
        print!("{}{blank}", theme.restore());
    }
    print!("{}", theme.restore());
}

/// Renders a horizontal border line at `row`. Returns the next free row.
fn render_border(row: usize, color: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", theme.restore());
    row + 1
}

/// Draws a framed box of `height` rows starting at `top` and clears its
/// interior. The title is embedded in the top edge.
pub(crate) fn draw_panel(top: usize, height: usize, title: &str, theme: &Theme, cols: usize) -> PanelArea {
    let left = PANEL_MARGIN + 1;
    let width = cols.saturating_sub(PANEL_MARGIN * 2).max(4);
    let inner_width = width - 2;
    let title_len = title.chars().count().min(inner_width.saturating_sub(1));
    let title: String = title.chars().take(title_len).collect();

    position_cursor(top, left);
    print!("{}", Theme::fg(&theme.colors.panel_border));
    print!("┌─{title}{}┐", "─".repeat(inner_width.saturating_sub(title_len + 1)));

    for row in top + 1..top + height.saturating_sub(1) {
        position_cursor(row, left);
        print!("{}", Theme::fg(&theme.colors.panel_border));
        print!("│");
        print!("{}", theme.restore());
        print!("{}", " ".repeat(inner_width));
        print!("{}", Theme::fg(&theme.colors.panel_border));
        print!("│");
    }

    position_cursor(top + height.saturating_sub(1), left);
    print!("{}", Theme::fg(&theme.colors.panel_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", theme.restore());

    PanelArea {
        top: top + 1,
        left: left + 1,
        width: inner_width,
        height: height.saturating_sub(2),
    }
}

/// Renders a full frame: background, list layout, then any open panel.
pub fn render_frame(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    fill_background(theme, rows, cols);

    let mut current_row = 2;
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, theme, cols);
    render_list_headers(current_row, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(LIST_TOP + 1, empty, theme, cols);
    } else {
        render_list_rows(LIST_TOP, &vm.display_items, theme, cols);
    }

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let show_more_row = border_row.saturating_sub(1);

    render_show_more(show_more_row, &vm.show_more, theme, cols);
    render_border(border_row, &theme.colors.border, theme, cols);
    render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(form) = &vm.search_form {
        render_search_panel(LIST_TOP, form, theme, cols);
    }
    if let Some(settings) = &vm.settings {
        render_settings_panel(LIST_TOP, settings, theme, cols);
    }
    if let Some(detail) = &vm.detail {
        let height = show_more_row.saturating_sub(LIST_TOP);
        render_detail_panel(LIST_TOP - 1, height + 1, detail, theme, cols);
    }
}
