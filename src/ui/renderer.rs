//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! ```no_run
//! use shelfie::{initialize, Config};
//!
//! let state = initialize(&Config::default());
//! shelfie::ui::render(&state, 24, 80);
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with `print!`; the host clears the pane before
/// each call.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();
    let viewmodel = state.compute_viewmodel(rows, cols);

    components::render_frame(&viewmodel, state.theme(), rows, cols);
}
