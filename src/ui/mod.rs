//! Terminal UI components.
//!
//! This module contains all drawing code:
//! - [`viewport`]: Visible window of the buffer
//! - `render`: Character grid and cursor placement
//! - `status`: Mode status line and toast row

pub mod viewport;

mod render;
mod status;

pub use render::render;
pub use status::status_line;

/// Rows reserved below the text area: the toast row and the status line.
pub const FOOTER_ROWS: u16 = 2;
/// Column where the status text starts.
pub const STATUS_LEFT_PADDING: u16 = 1;
/// Name shown in front of the mode label.
pub const APP_TITLE: &str = "linedit";
