//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the shelfie library and the Zellij plugin
//! system: it implements `ZellijPlugin`, turns host events into library
//! [`Event`](shelfie::Event)s and executes the returned actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request filesystem access when `catalog_file` is set
//! 3. **Subscribe**: Register for `Key` and `PermissionRequestResult` events
//! 4. **Update**: Map keys via `shelfie::map_key`, delegate to `handle_event`
//! 5. **Render**: Call the library render function
//!
//! The plugin only exists on the `wasm32` target; a native build prints a
//! short notice instead.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
use zellij_tile::prelude::*;

#[cfg(target_arch = "wasm32")]
register_plugin!(plugin::State);

#[cfg(target_arch = "wasm32")]
mod plugin {
    use shelfie::catalog::{CatalogSource, JsonFileCatalog};
    use shelfie::{handle_event, map_key, Action, Config, Event};
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    /// Plugin state wrapper around the library's `AppState`.
    pub struct State {
        app: shelfie::AppState,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: shelfie::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        /// Parses configuration, initializes state, and subscribes to events.
        ///
        /// # Permissions
        ///
        /// `FullHdAccess` is requested only when a `catalog_file` is
        /// configured; otherwise the built-in catalog needs no permissions.
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            shelfie::observability::init_tracing(&config);

            let _span = tracing::debug_span!("plugin_load").entered();

            tracing::debug!(config = ?config, "parsed configuration");
            self.app = shelfie::initialize(&config);
            tracing::info!(
                books = self.app.catalog.len(),
                theme = %self.app.theme_mode,
                "app state initialized"
            );

            subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

            if config.catalog_file.is_some() {
                tracing::debug!("requesting filesystem access for catalog file");
                request_permission(&[PermissionType::FullHdAccess]);
            }
        }

        /// Handles a host event. Returns `true` if the UI should re-render.
        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let _span = tracing::debug_span!("plugin_update").entered();

            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => {
                    match map_key(self.app.overlay, self.app.search_form.focus, key) {
                        Some(event) => event,
                        None => return false,
                    }
                }
                zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                    Event::PermissionsResult {
                        granted: matches!(status, PermissionStatus::Granted),
                    }
                }
                _ => return false,
            };

            self.dispatch(&our_event)
        }

        fn render(&mut self, rows: usize, cols: usize) {
            shelfie::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        /// Runs an event through the library and executes resulting actions.
        fn dispatch(&mut self, event: &Event) -> bool {
            match handle_event(&mut self.app, event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(
                        action_count = actions.len(),
                        should_render = should_render,
                        "event handled successfully"
                    );
                    actions
                        .iter()
                        .fold(should_render, |render, action| self.execute_action(action) || render)
                }
                Err(e) => {
                    tracing::error!(error = %e, "error handling event");
                    false
                }
            }
        }

        /// Translates library actions to Zellij API calls.
        ///
        /// Returns whether the action's follow-up event changed the UI.
        #[tracing::instrument(level = "debug", skip(self))]
        fn execute_action(&mut self, action: &Action) -> bool {
            match action {
                Action::CloseFocus => {
                    tracing::debug!("hiding plugin");
                    hide_self();
                    false
                }
                Action::LoadCatalog { path } => {
                    let follow_up = match JsonFileCatalog::new(path.clone()).load() {
                        Ok(catalog) => Event::CatalogLoaded(catalog),
                        Err(e) => Event::CatalogFailed { error: e.to_string() },
                    };
                    self.dispatch(&follow_up)
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("shelfie is a Zellij plugin; build it with `cargo build --target wasm32-wasip1`.");
}
