// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. viewport::Viewport)
    clippy::module_name_repetitions
)]

//! # Linedit
//!
//! A minimal modal terminal text editor.
//!
//! Linedit loads one file into a line buffer, draws it full-screen, and
//! lets you move around and edit it:
//! - Navigate mode (the default) only moves the cursor
//! - Insert mode (Ctrl+I) types into the buffer; Esc goes back
//! - Ctrl+S writes the file, Ctrl+C quits without saving
//!
//! ## Architecture
//!
//! Linedit uses The Elm Architecture (TEA) pattern:
//! - **Model**: Buffer, cursor, mode and column memory
//! - **Message**: Decoded key and terminal events
//! - **Update**: Pure state transitions
//! - **View**: Render the character grid and status line
//!
//! ## Modules
//!
//! - [`app`]: Editor controller and event loop
//! - [`editor`]: Line buffer, cursor and mode types
//! - [`ui`]: Terminal drawing
//! - [`config`]: Saved command-line defaults
//! - [`perf`]: Timing scopes and event debug log

pub mod app;
pub mod config;
pub mod editor;
pub mod perf;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model, update};
    pub use crate::editor::{Buffer, Cursor, Direction, Mode};
    pub use crate::ui::viewport::Viewport;
}
