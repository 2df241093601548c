use std::rc::Rc;

/// A cursor into a named source text.
///
/// A fresh position sits *before* the first character (`index == -1`) and is
/// moved forward one character at a time with [`Position::advance`]. Cloning
/// a position freezes a snapshot of the cursor; the file name and text are
/// shared immutably, so a snapshot never observes later movement.
///
/// Lines and columns are 0-based.
///
/// # Example
/// ```
/// use arithma_front::interpreter::position::Position;
///
/// let mut position = Position::new("<stdin>", "1\n2");
/// position.advance(None);
/// assert_eq!(position.index, 0);
///
/// let before = position.clone();
/// position.advance(Some('1')).advance(Some('\n'));
///
/// assert_eq!(position.line, 1);
/// assert_eq!(position.column, 0);
/// assert_eq!(before.line, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Character index into `file_text`; `-1` before the first advance.
    pub index:     isize,
    /// Column within the current line.
    pub column:    usize,
    /// Line number, starting at `0`.
    pub line:      usize,
    /// Name of the source, used when rendering diagnostics.
    pub file_name: Rc<str>,
    /// The complete source text this position points into.
    pub file_text: Rc<str>,
}

impl Position {
    /// Creates a position before the first character of `file_text`.
    #[must_use]
    pub fn new(file_name: &str, file_text: &str) -> Self {
        Self { index:     -1,
               column:    0,
               line:      0,
               file_name: Rc::from(file_name),
               file_text: Rc::from(file_text), }
    }

    /// Moves the cursor past `current_char`.
    ///
    /// Leaving a newline starts a new line at column `0`.
    pub fn advance(&mut self, current_char: Option<char>) -> &mut Self {
        self.index += 1;
        self.column += 1;

        if current_char == Some('\n') {
            self.line += 1;
            self.column = 0;
        }

        self
    }

    /// The character offset of this position, clamped to `0` before the
    /// first advance.
    #[must_use]
    pub fn offset(&self) -> usize {
        usize::try_from(self.index).unwrap_or(0)
    }
}

/// A half-open range `[start, end)` of source positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Position of the first character covered.
    pub start: Position,
    /// Position just past the last character covered.
    pub end:   Position,
}

impl Span {
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// An empty span located at `position`.
    #[must_use]
    pub fn empty(position: &Position) -> Self {
        Self { start: position.clone(),
               end:   position.clone(), }
    }

    /// Character offsets covered by the span.
    #[must_use]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start.offset()..self.end.offset()
    }
}
