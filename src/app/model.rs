use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::editor::{Buffer, ColumnMemory, Cursor, Mode};
use crate::ui::FOOTER_ROWS;
use crate::ui::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete editor session state.
///
/// All state lives here - no global or scattered state. The buffer is the
/// single source of truth for text; cursor, mode and column memory belong
/// to the controller.
#[derive(Debug)]
pub struct Model {
    /// The text being edited
    pub buffer: Buffer,
    /// Where edits are applied
    pub cursor: Cursor,
    /// Navigate or Insert
    pub mode: Mode,
    /// Remembered column per row for vertical movement
    pub column_memory: ColumnMemory,
    /// Visible window of the buffer
    pub viewport: Viewport,
    /// File loaded at startup and written on save
    pub file_path: PathBuf,
    /// Whether the buffer changed since load or the last successful save
    pub modified: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    toast: Option<Toast>,
}

impl Model {
    /// Create a new model in Navigate mode with the cursor at the origin.
    ///
    /// `terminal_size` is the full terminal; the footer rows are reserved.
    pub fn new(file_path: PathBuf, buffer: Buffer, terminal_size: (u16, u16)) -> Self {
        let column_memory = ColumnMemory::with_rows(buffer.line_count());
        Self {
            buffer,
            cursor: Cursor::default(),
            mode: Mode::default(),
            column_memory,
            viewport: Viewport::new(
                terminal_size.0,
                terminal_size.1.saturating_sub(FOOTER_ROWS),
            ),
            file_path,
            modified: false,
            should_quit: false,
            toast: None,
        }
    }

    /// Start the session in a specific mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Write the buffer to [`Self::file_path`].
    ///
    /// On success the buffer is marked unmodified and the number of lines
    /// written is returned. On failure nothing in the model changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&mut self) -> Result<usize> {
        self.buffer
            .save_to(&self.file_path)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        self.modified = false;
        Ok(self.buffer.line_count())
    }

    /// File name shown in the status line.
    pub fn display_name(&self) -> String {
        self.file_path.file_name().map_or_else(
            || "untitled".to_string(),
            |s| s.to_string_lossy().to_string(),
        )
    }

    pub(crate) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(crate) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(PathBuf::new(), Buffer::new(), (80, 24))
    }
}
