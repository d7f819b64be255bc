// End-to-end browsing against the built-in catalog, driven through the public
// event API the plugin shim uses.

use shelfie::{handle_event, initialize, map_key, Config, Event, Overlay, ThemeMode};
use zellij_tile::prelude::{BareKey, KeyWithModifier};

fn send(state: &mut shelfie::AppState, event: Event) -> bool {
    let (render, actions) = handle_event(state, &event).expect("event handling failed");
    assert!(actions.is_empty(), "unexpected actions: {actions:?}");
    render
}

fn press(state: &mut shelfie::AppState, bare: BareKey) -> bool {
    let key = KeyWithModifier::new(bare);
    match map_key(state.overlay, state.search_form.focus, &key) {
        Some(event) => send(state, event),
        None => false,
    }
}

fn type_text(state: &mut shelfie::AppState, text: &str) {
    for c in text.chars() {
        press(state, BareKey::Char(c));
    }
}

fn titles(state: &shelfie::AppState) -> Vec<&str> {
    state
        .matches
        .iter()
        .map(|&idx| state.catalog.books[idx].title.as_str())
        .collect()
}

#[test]
fn test_first_page_and_show_more() {
    let mut state = initialize(&Config::default());
    assert_eq!(state.matches.len(), 42);
    assert_eq!(state.revealed_count(), 36);

    let vm = state.compute_viewmodel(24, 80);
    assert_eq!(vm.header.title, " Book Connect (36/42) ");
    assert_eq!(vm.show_more.label, "Show more (6)");
    assert!(vm.show_more.enabled);
    assert!(vm.empty_state.is_none());

    assert!(press(&mut state, BareKey::Char('m')));
    assert_eq!(state.revealed_count(), 42);
    assert_eq!(state.selected_index, 36);
    assert_eq!(state.selected_book().map(|(_, b)| b.id.as_str()), Some("treasure-island"));

    let vm = state.compute_viewmodel(24, 80);
    assert_eq!(vm.show_more.label, "Show more (0)");
    assert!(!vm.show_more.enabled);
    assert!(vm.display_items.iter().any(|item| item.is_selected && item.title == "Treasure Island"));

    assert!(!press(&mut state, BareKey::Char(' ')));
}

#[test]
fn test_title_search_is_case_insensitive() {
    let mut state = initialize(&Config::default());

    press(&mut state, BareKey::Char('/'));
    assert_eq!(state.overlay, Overlay::Search);
    type_text(&mut state, "ADVENTURE");
    press(&mut state, BareKey::Enter);

    assert_eq!(state.overlay, Overlay::List);
    assert_eq!(
        titles(&state),
        vec![
            "Adventures of Huckleberry Finn",
            "The Adventures of Tom Sawyer",
            "Alice's Adventures in Wonderland",
        ]
    );

    let vm = state.compute_viewmodel(24, 120);
    assert_eq!(vm.display_items[1].highlight_ranges, vec![(4, 13)]);
}

#[test]
fn test_whitespace_title_matches_everything() {
    let mut state = initialize(&Config::default());

    press(&mut state, BareKey::Char('/'));
    type_text(&mut state, "   ");
    press(&mut state, BareKey::Enter);

    assert_eq!(state.matches.len(), 42);
    assert_eq!(state.filters.title, "   ");
}

#[test]
fn test_author_and_genre_selects() {
    let mut state = initialize(&Config::default());

    press(&mut state, BareKey::Char('/'));
    type_text(&mut state, "the");
    press(&mut state, BareKey::Tab);
    for _ in 0..8 {
        press(&mut state, BareKey::Right);
    }
    assert_eq!(state.search_form.author_label(), "H. G. Wells");

    press(&mut state, BareKey::Tab);
    for _ in 0..3 {
        press(&mut state, BareKey::Char('l'));
    }
    assert_eq!(state.search_form.genre_label(), "Horror");

    press(&mut state, BareKey::Enter);
    assert_eq!(titles(&state), vec!["The Invisible Man", "The Island of Doctor Moreau"]);
    assert_eq!(state.compute_viewmodel(24, 80).header.title, " Book Connect (2/2) ");
}

#[test]
fn test_no_results_message_toggles() {
    let mut state = initialize(&Config::default());

    press(&mut state, BareKey::Char('/'));
    type_text(&mut state, "zzz");
    press(&mut state, BareKey::Enter);

    let vm = state.compute_viewmodel(24, 80);
    let empty = vm.empty_state.expect("no results message");
    assert_eq!(empty.message, "No results found. Your filters might be too narrow.");
    assert!(vm.display_items.is_empty());
    assert!(!vm.show_more.enabled);

    press(&mut state, BareKey::Char('/'));
    assert_eq!(state.search_form.title, "zzz");
    for _ in 0..3 {
        press(&mut state, BareKey::Backspace);
    }
    press(&mut state, BareKey::Enter);

    assert!(state.compute_viewmodel(24, 80).empty_state.is_none());
    assert_eq!(state.matches.len(), 42);
}

#[test]
fn test_cancelled_search_keeps_results() {
    let mut state = initialize(&Config::default());

    press(&mut state, BareKey::Char('/'));
    type_text(&mut state, "dracula");
    press(&mut state, BareKey::Esc);

    assert_eq!(state.overlay, Overlay::List);
    assert_eq!(state.matches.len(), 42);
    assert!(state.search_form.title.is_empty());
}

#[test]
fn test_preview_shows_subtitle_and_genres() {
    let mut state = initialize(&Config::default());

    press(&mut state, BareKey::Enter);
    assert_eq!(state.overlay, Overlay::Detail { book: 0 });

    let detail = state.compute_viewmodel(24, 80).detail.expect("preview");
    assert_eq!(detail.title, "Pride and Prejudice");
    assert_eq!(detail.subtitle, "Jane Austen (1813)");
    assert_eq!(detail.genres, "Classic, Romance, Satire");
    assert_eq!(detail.image, "https://covers.example.org/pride-and-prejudice.jpg");
    assert!(!detail.description.is_empty());

    press(&mut state, BareKey::Char('q'));
    assert_eq!(state.overlay, Overlay::List);
}

#[test]
fn test_theme_toggle_round_trip() {
    let mut state = initialize(&Config::default());
    assert_eq!(state.theme_mode, ThemeMode::Night);

    press(&mut state, BareKey::Char('t'));
    assert_eq!(state.compute_viewmodel(24, 80).settings.map(|s| s.selected), Some(ThemeMode::Night));
    press(&mut state, BareKey::Right);
    press(&mut state, BareKey::Enter);
    assert_eq!(state.theme_mode, ThemeMode::Day);
    assert_eq!(state.theme().colors.background, "#ffffff");

    press(&mut state, BareKey::Char('t'));
    press(&mut state, BareKey::Left);
    press(&mut state, BareKey::Esc);
    assert_eq!(state.theme_mode, ThemeMode::Day);
}

#[test]
fn test_quit_hides_plugin() {
    let mut state = initialize(&Config::default());
    let key = KeyWithModifier::new(BareKey::Char('q'));
    let event = map_key(state.overlay, state.search_form.focus, &key).expect("bound key");

    let (render, actions) = handle_event(&mut state, &event).expect("event handling failed");
    assert!(!render);
    assert_eq!(actions, vec![shelfie::Action::CloseFocus]);
}
