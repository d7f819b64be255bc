//! Keyboard mapping from Zellij keys to [`Event`]s.
//!
//! The mapping depends on the open overlay and, inside the search form, on
//! the focused field: letters are text in the title field but commands
//! everywhere else.
//!
//! # Keybindings
//!
//! Book list:
//! - `j`/`Down`/`Ctrl+n`: Move down
//! - `k`/`Up`/`Ctrl+p`: Move up
//! - `Enter`: Preview selected book
//! - `m`/`Space`: Show more
//! - `/`: Open search
//! - `t`: Open theme settings
//! - `q`: Hide plugin
//!
//! Search form:
//! - `Tab`/`Down`, `Shift+Tab`/`Up`: Change field
//! - `Left`/`Right` (also `h`/`l` on selects): Change option
//! - `Enter`: Search, `Esc`: Cancel
//!
//! Theme settings: `Left`/`Right`/`h`/`l`/`Tab` toggle, `Enter` saves, `Esc` cancels.
//!
//! Preview: `Esc`/`Enter`/`q` close.

use super::handler::Event;
use super::modes::{FormField, Overlay};
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Maps a key press to an event for the given overlay and form focus.
///
/// Returns `None` for keys with no binding.
#[must_use]
pub fn map_key(overlay: Overlay, focus: FormField, key: &KeyWithModifier) -> Option<Event> {
    tracing::trace!(bare_key = ?key.bare_key, overlay = ?overlay, "key event");

    match overlay {
        Overlay::List => map_list_key(key),
        Overlay::Search => map_search_key(focus, key),
        Overlay::Settings => map_settings_key(key),
        Overlay::Detail { .. } => map_detail_key(key),
    }
}

fn map_list_key(key: &KeyWithModifier) -> Option<Event> {
    if key.has_modifiers(&[KeyModifier::Ctrl]) {
        return match key.bare_key {
            BareKey::Char('n') => Some(Event::KeyDown),
            BareKey::Char('p') => Some(Event::KeyUp),
            _ => None,
        };
    }

    Some(match key.bare_key {
        BareKey::Down | BareKey::Char('j') => Event::KeyDown,
        BareKey::Up | BareKey::Char('k') => Event::KeyUp,
        BareKey::Enter => Event::OpenPreview,
        BareKey::Char('m' | ' ') => Event::ShowMore,
        BareKey::Char('/') => Event::OpenSearch,
        BareKey::Char('t') => Event::OpenSettings,
        BareKey::Char('q') => Event::CloseFocus,
        _ => return None,
    })
}

fn map_search_key(focus: FormField, key: &KeyWithModifier) -> Option<Event> {
    let shifted = key.has_modifiers(&[KeyModifier::Shift]);
    let typing = key.has_no_modifiers() || shifted;

    Some(match key.bare_key {
        BareKey::Esc => Event::Cancel,
        BareKey::Enter => Event::Submit,
        BareKey::Tab if shifted => Event::PrevField,
        BareKey::Tab | BareKey::Down => Event::NextField,
        BareKey::Up => Event::PrevField,
        BareKey::Left if focus != FormField::Title => Event::OptionPrev,
        BareKey::Right if focus != FormField::Title => Event::OptionNext,
        BareKey::Backspace if focus == FormField::Title => Event::Backspace,
        BareKey::Char(c) if focus == FormField::Title && typing => Event::Char(c),
        BareKey::Char('h') if typing => Event::OptionPrev,
        BareKey::Char('l' | ' ') if typing => Event::OptionNext,
        _ => return None,
    })
}

fn map_settings_key(key: &KeyWithModifier) -> Option<Event> {
    Some(match key.bare_key {
        BareKey::Esc => Event::Cancel,
        BareKey::Enter => Event::Submit,
        BareKey::Left | BareKey::Up | BareKey::Char('h' | 'k') => Event::OptionPrev,
        BareKey::Right | BareKey::Down | BareKey::Tab | BareKey::Char('l' | 'j' | ' ') => {
            Event::OptionNext
        }
        _ => return None,
    })
}

fn map_detail_key(key: &KeyWithModifier) -> Option<Event> {
    Some(match key.bare_key {
        BareKey::Esc | BareKey::Char('q') => Event::Cancel,
        BareKey::Enter => Event::Submit,
        _ => return None,
    })
}
