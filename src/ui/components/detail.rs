//! Book preview panel renderer.

use super::draw_panel;
use crate::ui::helpers::{position_cursor, print_padded, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailInfo;

/// Renders the preview of one book in a panel spanning `height` rows.
///
/// Layout inside the frame: title, subtitle, genres, a blank line, the
/// wrapped description, and the cover reference on the last line. The
/// description is cut off when it does not fit.
pub fn render_detail_panel(row: usize, height: usize, detail: &DetailInfo, theme: &Theme, cols: usize) {
    let height = height.max(6);
    let area = draw_panel(row, height, " Preview ", theme, cols);
    let inner = area.width.saturating_sub(2);

    let line = |offset: usize| {
        position_cursor(area.top + offset, area.left);
        print!(" ");
    };

    line(0);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print_padded(&detail.title, inner);
    print!("{}", theme.restore());

    line(1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_padded(&detail.subtitle, inner);
    print!("{}", theme.restore());

    line(2);
    print!("{}", Theme::fg(&theme.colors.accent));
    print_padded(&detail.genres, inner);
    print!("{}", theme.restore());

    let inner_rows = area.height;
    let description_rows = inner_rows.saturating_sub(5);
    for (offset, text) in wrap_text(&detail.description, inner)
        .iter()
        .take(description_rows)
        .enumerate()
    {
        line(4 + offset);
        print_padded(text, inner);
    }

    if !detail.image.is_empty() {
        line(inner_rows.saturating_sub(1));
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print_padded(&format!("Cover: {}", detail.image), inner);
        print!("{}", theme.restore());
    }
}
