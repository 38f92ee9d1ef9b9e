use crate::app::{Model, ToastLevel};
use crate::editor::{BufferError, Cursor, Direction, Mode};

/// All possible events and actions in the editor.
///
/// These represent user input and terminal events, already decoded from
/// raw key presses by the input layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Cursor
    /// Move the cursor one step
    MoveCursor(Direction),

    // Editing
    /// Insert a printable character at the cursor (Insert mode only)
    InsertChar(char),
    /// Delete the character before the cursor (Backspace)
    DeleteBackward,
    /// Split the line at the cursor (Enter)
    Newline,

    // Mode
    /// Switch to Insert mode
    EnterInsertMode,
    /// Switch back to Navigate mode
    EnterNavigateMode,

    // File
    /// Write the buffer to the session file
    Save,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,

    // Application
    /// Quit without saving
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// All cursor, mode and buffer transitions happen here. Writing the file
/// for [`Message::Save`] is a side effect handled by the event loop.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::MoveCursor(direction) => move_cursor(&mut model, direction),
        Message::InsertChar(ch) => {
            if model.mode == Mode::Insert {
                insert_char(&mut model, ch);
            } else {
                model.show_toast(ToastLevel::Warning, "Navigate mode: press Ctrl+I to insert");
            }
        }
        Message::DeleteBackward => delete_backward(&mut model),
        Message::Newline => newline(&mut model),
        Message::EnterInsertMode => model.mode = Mode::Insert,
        Message::EnterNavigateMode => model.mode = Mode::Navigate,
        Message::Save | Message::Redraw => {}
        Message::Resize(width, height) => {
            model
                .viewport
                .resize(width, height.saturating_sub(crate::ui::FOOTER_ROWS));
        }
        Message::Quit => model.should_quit = true,
    }
    debug_assert_eq!(
        model.column_memory.len(),
        model.buffer.line_count(),
        "column memory out of step with buffer rows"
    );
    let Cursor { row, col } = model.cursor;
    model.viewport.ensure_visible(row, col);
    model
}

fn move_cursor(model: &mut Model, direction: Direction) {
    let Cursor { row, col } = model.cursor;
    match direction {
        Direction::Up if row > 0 => move_to_row(model, row - 1),
        Direction::Down if row + 1 < model.buffer.line_count() => move_to_row(model, row + 1),
        Direction::Left if col > 0 => model.cursor.col -= 1,
        Direction::Right if col < model.buffer.line_len(row) => model.cursor.col += 1,
        _ => {}
    }
}

/// Leave the current row vertically, restoring the column last used on
/// `target`. The restored column is clamped because the remembered row may
/// have been shortened since.
fn move_to_row(model: &mut Model, target: usize) {
    model
        .column_memory
        .remember(model.cursor.row, model.cursor.col);
    let col = model
        .column_memory
        .get(target)
        .min(model.buffer.line_len(target));
    model.cursor = Cursor::at(target, col);
}

fn insert_char(model: &mut Model, ch: char) {
    let Cursor { row, col } = model.cursor;
    if let Some(created_line) = checked(model.buffer.insert_char(row, col, ch)) {
        if created_line {
            model.column_memory.insert_row(0);
        }
        model.cursor.col += 1;
        model.modified = true;
    }
}

/// Backspace. Column 0 of the first row is a no-op; column 0 of any other
/// row joins it onto the row above.
fn delete_backward(model: &mut Model) {
    if model.buffer.is_empty() {
        return;
    }
    let Cursor { row, col } = model.cursor;
    if col > 0 {
        if checked(model.buffer.delete_char_before(row, col)).flatten().is_some() {
            model.cursor.col -= 1;
            model.modified = true;
        }
    } else if row > 0
        && let Some(join_col) = checked(model.buffer.join_with_previous(row))
    {
        model.column_memory.remove_row(row);
        model.cursor = Cursor::at(row - 1, join_col);
        model.modified = true;
    }
}

fn newline(model: &mut Model) {
    if model.buffer.ensure_first_line() {
        model.column_memory.insert_row(0);
    }
    let Cursor { row, col } = model.cursor;
    if let Some(new_row) = checked(model.buffer.split_line_at(row, col)) {
        model.column_memory.insert_row(new_row);
        model.cursor = Cursor::at(new_row, 0);
        model.modified = true;
    }
}

/// Unwrap a buffer result the controller expects to succeed.
///
/// The controller keeps the cursor inside the buffer, so an error here is a
/// bug: it is logged, and debug builds panic.
fn checked<T>(result: Result<T, BufferError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::error!(%err, "buffer contract violated");
            if cfg!(debug_assertions) {
                panic!("buffer contract violated: {err}");
            }
            None
        }
    }
}
