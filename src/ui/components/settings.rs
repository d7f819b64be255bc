//! Theme picker panel renderer.

use super::draw_panel;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::{Theme, ThemeMode};
use crate::ui::viewmodel::SettingsInfo;

/// Rows the panel occupies, frame included.
pub const SETTINGS_PANEL_HEIGHT: usize = 3;

/// Renders the day/night picker starting at `row`.
///
/// ```text
/// ┌─ Theme ─────────────────┐
/// │   ( ) Day    (•) Night  │
/// └─────────────────────────┘
/// ```
pub fn render_settings_panel(row: usize, settings: &SettingsInfo, theme: &Theme, cols: usize) -> usize {
    let area = draw_panel(row, SETTINGS_PANEL_HEIGHT, " Theme ", theme, cols);

    position_cursor(area.top, area.left);
    print!("   ");
    for mode in [ThemeMode::Day, ThemeMode::Night] {
        let chosen = settings.selected == mode;
        if chosen {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.accent));
        }
        let marker = if chosen { "(•)" } else { "( )" };
        let label = match mode {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        print!("{marker} {label}    ");
        print!("{}", theme.restore());
    }

    row + SETTINGS_PANEL_HEIGHT
}
