// Custom catalog and theme files loaded through the configuration surface.

use shelfie::catalog::{CatalogSource, JsonFileCatalog};
use shelfie::{handle_event, initialize, Action, Config, Event, ShelfieError, ThemeMode};
use std::io::Write;
use tempfile::NamedTempFile;

const SEPIA_NIGHT: &str = r##"
name = "sepia-night"

[colors]
background = "#2b2118"
header_fg = "#f4ecd8"
selection_fg = "#2b2118"
selection_bg = "#f4ecd8"
text_normal = "#f4ecd8"
text_dim = "#a89984"
border = "#504945"
panel_border = "#f4ecd8"
match_highlight_fg = "#2b2118"
match_highlight_bg = "#d79921"
empty_state_fg = "#d79921"
accent = "#d79921"
"##;

const SMALL_CATALOG: &str = r#"{
  "authors": [{ "id": "kipling", "name": "Rudyard Kipling" }],
  "genres": [{ "id": "childrens", "name": "Children's" }],
  "books": [
    {
      "id": "kim",
      "title": "Kim",
      "author": "kipling",
      "genres": [],
      "image": "https://covers.example.org/kim.jpg",
      "published": "1901-10-01T00:00:00.000Z",
      "description": "An orphan roams British India."
    },
    {
      "id": "just-so-stories",
      "title": "Just So Stories",
      "author": "kipling",
      "genres": ["childrens"],
      "image": "https://covers.example.org/just-so-stories.jpg",
      "published": "1902-01-01T00:00:00.000Z",
      "description": "Origin fables for children."
    }
  ]
}"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_custom_night_theme_file() {
    let file = write_temp(SEPIA_NIGHT);
    let config = Config {
        night_theme_file: Some(file.path().to_string_lossy().into_owned()),
        ..Config::default()
    };

    let state = initialize(&config);
    assert_eq!(state.theme().name, "sepia-night");
    assert_eq!(state.themes.get(ThemeMode::Day).name, "day");
}

#[test]
fn test_broken_theme_file_falls_back() {
    let file = write_temp("name = \"broken\"\n[colors]\nbackground = 3\n");
    let config = Config {
        day_theme_file: Some(file.path().to_string_lossy().into_owned()),
        theme: ThemeMode::Day,
        ..Config::default()
    };

    let state = initialize(&config);
    assert_eq!(state.theme().name, "day");
}

#[test]
fn test_catalog_file_replaces_builtin_after_permissions() {
    let file = write_temp(SMALL_CATALOG);
    let path = file.path().to_string_lossy().into_owned();
    let config = Config {
        catalog_file: Some(path.clone()),
        ..Config::default()
    };
    let mut state = initialize(&config);
    assert_eq!(state.catalog.len(), 42);

    let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })
        .expect("event handling failed");
    let [Action::LoadCatalog { path: load_path }] = actions.as_slice() else {
        panic!("expected a single LoadCatalog action, got {actions:?}");
    };
    assert_eq!(load_path.to_string_lossy(), path);

    let catalog = JsonFileCatalog::new(load_path.clone()).load().expect("catalog loads");
    let (render, _) = handle_event(&mut state, &Event::CatalogLoaded(catalog))
        .expect("event handling failed");

    assert!(render);
    assert_eq!(state.catalog.len(), 2);
    assert_eq!(state.matches, vec![0, 1]);
    assert_eq!(state.search_form.author_label(), "All Authors");
    assert_eq!(state.search_form.authors.len(), 2);
    assert_eq!(state.compute_viewmodel(24, 80).header.title, " Book Connect (2/2) ");
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let duplicated = SMALL_CATALOG.replace("\"just-so-stories\"", "\"kim\"");
    let file = write_temp(&duplicated);

    let err = JsonFileCatalog::new(file.path()).load().unwrap_err();
    assert!(matches!(err, ShelfieError::Catalog(ref msg) if msg.contains("duplicate book id: kim")));
}
