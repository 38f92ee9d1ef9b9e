/// Cursor position in the buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column in characters. May equal the line length
    /// (the append position).
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at a specific position.
    pub const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Editing mode.
///
/// Typed characters only reach the buffer in [`Mode::Insert`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Navigate,
    Insert,
}

impl Mode {
    /// Label shown in the status line.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Navigate => "Navigate Mode",
            Self::Insert => "Insert Mode",
        }
    }
}

/// Remembered column for every row, used to restore the horizontal
/// position when the cursor comes back to a row vertically.
///
/// Entries are kept index-aligned with buffer rows: callers insert an entry
/// whenever a row is created and remove it when a row is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMemory {
    cols: Vec<usize>,
}

impl ColumnMemory {
    /// Memory for `rows` rows, all remembering column 0.
    pub fn with_rows(rows: usize) -> Self {
        Self {
            cols: vec![0; rows],
        }
    }

    /// Number of rows tracked.
    pub(crate) fn len(&self) -> usize {
        self.cols.len()
    }

    /// Column remembered for `row` (0 for rows never visited).
    pub fn get(&self, row: usize) -> usize {
        self.cols.get(row).copied().unwrap_or(0)
    }

    /// Remember `col` for `row`.
    pub fn remember(&mut self, row: usize, col: usize) {
        if row >= self.cols.len() {
            self.cols.resize(row + 1, 0);
        }
        self.cols[row] = col;
    }

    /// Add an entry for a row created at index `row`, shifting later rows.
    pub fn insert_row(&mut self, row: usize) {
        let idx = row.min(self.cols.len());
        self.cols.insert(idx, 0);
    }

    /// Drop the entry for a removed row, shifting later rows.
    pub fn remove_row(&mut self, row: usize) {
        if row < self.cols.len() {
            self.cols.remove(row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_defaults_to_origin() {
        assert_eq!(Cursor::default(), Cursor::at(0, 0));
    }

    #[test]
    fn test_mode_defaults_to_navigate() {
        assert_eq!(Mode::default(), Mode::Navigate);
        assert_eq!(Mode::Navigate.label(), "Navigate Mode");
        assert_eq!(Mode::Insert.label(), "Insert Mode");
    }

    #[test]
    fn test_with_rows_starts_at_zero() {
        let memory = ColumnMemory::with_rows(3);
        assert_eq!(memory.len(), 3);
        assert_eq!(memory.get(2), 0);
        assert_eq!(memory.get(10), 0);
    }

    #[test]
    fn test_remember_and_get() {
        let mut memory = ColumnMemory::with_rows(2);
        memory.remember(1, 7);
        assert_eq!(memory.get(1), 7);
        assert_eq!(memory.get(0), 0);
    }

    #[test]
    fn test_insert_row_shifts_later_entries() {
        let mut memory = ColumnMemory::with_rows(2);
        memory.remember(0, 3);
        memory.remember(1, 5);
        memory.insert_row(1);
        assert_eq!(memory.len(), 3);
        assert_eq!(memory.get(0), 3);
        assert_eq!(memory.get(1), 0);
        assert_eq!(memory.get(2), 5);
    }

    #[test]
    fn test_remove_row_shifts_later_entries() {
        let mut memory = ColumnMemory::with_rows(3);
        memory.remember(2, 4);
        memory.remove_row(1);
        assert_eq!(memory.len(), 2);
        assert_eq!(memory.get(1), 4);
    }

    #[test]
    fn test_insert_into_empty_memory() {
        let mut memory = ColumnMemory::default();
        assert_eq!(memory.len(), 0);
        memory.insert_row(0);
        assert_eq!(memory.len(), 1);
    }
}
