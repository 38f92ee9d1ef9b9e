use std::fmt::{self, Write as _};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use thiserror::Error;

/// Errors produced by [`Buffer`] operations.
#[derive(Debug, Error)]
pub enum BufferError {
    /// The source or sink could not be opened, read or written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The source contained bytes that are not valid UTF-8.
    #[error("file is not valid UTF-8 text")]
    NotUtf8,
    /// A row index outside the buffer was passed to a mutation.
    #[error("row {row} is out of range (buffer has {line_count} lines)")]
    RowOutOfRange { row: usize, line_count: usize },
    /// A column past the end of the addressed line was passed to a mutation.
    #[error("column {col} is out of range for row {row} (line length {len})")]
    ColumnOutOfRange { row: usize, col: usize, len: usize },
}

impl BufferError {
    /// Whether this error means a caller broke the row/column contract,
    /// as opposed to an I/O failure.
    pub const fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::RowOutOfRange { .. } | Self::ColumnOutOfRange { .. }
        )
    }
}

/// One row of text: a sequence of code points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    chars: Vec<char>,
}

impl Line {
    /// Create an empty line.
    pub const fn new() -> Self {
        Self { chars: Vec::new() }
    }

    /// Number of characters in the line.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The characters of the line, in order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }
}

impl FromIterator<char> for Line {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &ch in &self.chars {
            f.write_char(ch)?;
        }
        Ok(())
    }
}

/// The text being edited, as an ordered sequence of lines.
///
/// Row `i` is drawn on screen row `i`. A buffer with zero lines is valid
/// (a new or empty file) until the first character or newline arrives.
///
/// Mutations take explicit `(row, col)` coordinates and never look at a
/// cursor; coordinates outside the buffer are reported as contract errors
/// rather than clamped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<Line>,
}

impl Buffer {
    /// Create a buffer with no lines.
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Create a buffer from already-split lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            lines: lines.into_iter().map(|s| Line::from(s.as_ref())).collect(),
        }
    }

    /// Read a buffer from a byte stream, one line per `\n`-terminated line.
    ///
    /// A final line without a newline is kept; an empty source yields an
    /// empty buffer. A `\r` directly before `\n` is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::NotUtf8`] if the input is not UTF-8, or
    /// [`BufferError::Io`] if reading fails.
    pub fn load(source: impl Read) -> Result<Self, BufferError> {
        let lines = BufReader::new(source)
            .lines()
            .map(|line| line.map(|text| Line::from(text.as_str())))
            .collect::<io::Result<Vec<_>>>()
            .map_err(|err| match err.kind() {
                io::ErrorKind::InvalidData => BufferError::NotUtf8,
                _ => BufferError::Io(err),
            })?;
        Ok(Self { lines })
    }

    /// Load the file at `path`.
    ///
    /// A file that does not exist yet yields an empty buffer so a new file
    /// can be created by saving.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Io`] for any failure other than a missing file.
    pub fn open(path: &Path) -> Result<Self, BufferError> {
        match File::open(path) {
            Ok(file) => Self::load(file),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "file not found, starting empty buffer");
                Ok(Self::new())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Write every line to `sink`, each followed by exactly one `\n`.
    ///
    /// Output is buffered and flushed before returning.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Io`] if any write or the final flush fails.
    pub fn save(&self, sink: impl Write) -> Result<(), BufferError> {
        let mut writer = BufWriter::new(sink);
        for line in &self.lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Create (or truncate) the file at `path` and save into it.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Io`] if the file cannot be created or written.
    pub fn save_to(&self, path: &Path) -> Result<(), BufferError> {
        let file = File::create(path)?;
        self.save(file)
    }

    /// Total number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line at `row`, if it exists.
    pub fn line(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    /// Length of the line at `row`, or 0 if there is no such line.
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, Line::len)
    }

    /// Iterate over all lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Create the first (empty) line if the buffer has none.
    ///
    /// Returns `true` if a line was created.
    pub fn ensure_first_line(&mut self) -> bool {
        if self.lines.is_empty() {
            self.lines.push(Line::new());
            true
        } else {
            false
        }
    }

    /// Insert `ch` at `col` on `row`, shifting the rest of the line right.
    ///
    /// On an empty buffer an insert at `(0, 0)` first creates an empty line
    /// at row 0; this is the only way typing adds a line. Returns `true`
    /// when that happened.
    ///
    /// # Errors
    ///
    /// Returns a contract error if `row` or `col` is out of range. The
    /// buffer is left unchanged.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) -> Result<bool, BufferError> {
        let created = row == 0 && col == 0 && self.ensure_first_line();
        let line = self.line_mut_at(row, col)?;
        line.chars.insert(col, ch);
        Ok(created)
    }

    /// Remove the character just before `col` on `row`.
    ///
    /// At `col == 0` nothing is removed and `None` is returned; joining
    /// lines is a separate operation ([`Self::join_with_previous`]).
    ///
    /// # Errors
    ///
    /// Returns a contract error if `row` or `col` is out of range.
    pub fn delete_char_before(&mut self, row: usize, col: usize) -> Result<Option<char>, BufferError> {
        let line = self.line_mut_at(row, col)?;
        if col == 0 {
            return Ok(None);
        }
        Ok(Some(line.chars.remove(col - 1)))
    }

    /// Split the line at `row` so that everything from `col` onwards moves
    /// to a new line inserted right after it.
    ///
    /// Returns the index of the new line (`row + 1`).
    ///
    /// # Errors
    ///
    /// Returns a contract error if `row` or `col` is out of range.
    pub fn split_line_at(&mut self, row: usize, col: usize) -> Result<usize, BufferError> {
        let line = self.line_mut_at(row, col)?;
        let tail = Line {
            chars: line.chars.split_off(col),
        };
        self.lines.insert(row + 1, tail);
        Ok(row + 1)
    }

    /// Append the line at `row` to the end of the line above and remove it.
    ///
    /// Returns the column in `row - 1` where the joined text starts.
    ///
    /// # Errors
    ///
    /// Returns a contract error if `row` is 0 or out of range.
    pub fn join_with_previous(&mut self, row: usize) -> Result<usize, BufferError> {
        if row == 0 || row >= self.lines.len() {
            return Err(BufferError::RowOutOfRange {
                row,
                line_count: self.lines.len(),
            });
        }
        let tail = self.lines.remove(row);
        let prev = &mut self.lines[row - 1];
        let join_col = prev.len();
        prev.chars.extend(tail.chars);
        Ok(join_col)
    }

    // --- Private helpers ---

    fn line_mut_at(&mut self, row: usize, col: usize) -> Result<&mut Line, BufferError> {
        let line_count = self.lines.len();
        let line = self
            .lines
            .get_mut(row)
            .ok_or(BufferError::RowOutOfRange { row, line_count })?;
        if col > line.len() {
            return Err(BufferError::ColumnOutOfRange {
                row,
                col,
                len: line.len(),
            });
        }
        Ok(line)
    }
}
