//! Line-buffer editing model.
//!
//! Provides the line-vector text buffer plus the cursor, mode and
//! per-row column memory types the controller in [`crate::app`] owns.

mod buffer;
mod cursor;

pub use buffer::{Buffer, BufferError, Line};
pub use cursor::{ColumnMemory, Cursor, Direction, Mode};
