//! Viewport management for scrolling.
//!
//! The [`Viewport`] tracks which window of the buffer is on screen and
//! scrolls it so the cursor stays visible.

use std::ops::Range;

/// Manages the visible portion of the buffer.
///
/// The viewport tracks:
/// - Text area dimensions (width, height)
/// - Row offset (first visible line)
/// - Column offset (first visible character of every line)
///
/// # Example
///
/// ```
/// use linedit::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 22);
/// assert_eq!(vp.visible_rows(100), 0..22);
///
/// vp.ensure_visible(30, 0);
/// assert_eq!(vp.visible_rows(100), 9..31);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    row_offset: usize,
    col_offset: usize,
}

impl Viewport {
    /// Create a new viewport.
    ///
    /// # Arguments
    ///
    /// * `width` - Text area width in columns
    /// * `height` - Text area height in rows (excluding the footer)
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            row_offset: 0,
            col_offset: 0,
        }
    }

    /// Get the viewport width.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the viewport height.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Index of the first visible row.
    pub const fn row_offset(&self) -> usize {
        self.row_offset
    }

    /// Index of the first visible column.
    pub const fn col_offset(&self) -> usize {
        self.col_offset
    }

    /// Range of buffer rows on screen, clamped to `total_lines`.
    pub fn visible_rows(&self, total_lines: usize) -> Range<usize> {
        let start = self.row_offset.min(total_lines);
        let end = (self.row_offset + self.height as usize).min(total_lines);
        start..end
    }

    /// Scroll the minimum amount needed for `(row, col)` to be on screen.
    pub const fn ensure_visible(&mut self, row: usize, col: usize) {
        self.row_offset = scroll_to(self.row_offset, self.height, row);
        self.col_offset = scroll_to(self.col_offset, self.width, col);
    }

    /// Screen position of `(row, col)` relative to the text area, if visible.
    pub fn screen_position(&self, row: usize, col: usize) -> Option<(u16, u16)> {
        let y = row.checked_sub(self.row_offset)?;
        let x = col.checked_sub(self.col_offset)?;
        let x = u16::try_from(x).ok().filter(|x| *x < self.width)?;
        let y = u16::try_from(y).ok().filter(|y| *y < self.height)?;
        Some((x, y))
    }

    /// Resize the viewport.
    pub const fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }
}

const fn scroll_to(offset: usize, extent: u16, target: usize) -> usize {
    let extent = extent as usize;
    if extent == 0 || target < offset {
        target
    } else if target >= offset + extent {
        target + 1 - extent
    } else {
        offset
    }
}
