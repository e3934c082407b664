/// A forward-only reader over the lines of a normalized source.
///
/// Block matchers look ahead with [`LineReader::peek_nth`] and commit with
/// [`LineReader::advance`]. There is no way to move the cursor backwards, so a
/// line handed to one block can never be re-read by another.
#[derive(Debug, Clone)]
pub struct LineReader<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineReader<'a> {
    /// Splits `source` on `\n`. An empty source yields no lines at all.
    pub fn new(source: &'a str) -> Self {
        let lines = if source.is_empty() {
            vec![]
        } else {
            source.split('\n').collect()
        };
        Self { lines, pos: 0 }
    }

    /// Index of the line under the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The line under the cursor, if any.
    pub fn peek(&self) -> Option<&'a str> {
        self.peek_nth(0)
    }

    /// The line `n` positions past the cursor, if any.
    pub fn peek_nth(&self, n: usize) -> Option<&'a str> {
        self.lines.get(self.pos + n).copied()
    }

    /// Consumes the line under the cursor.
    pub fn advance(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    /// Consumes lines while `pred` holds, returning how many were skipped.
    pub fn skip_while(&mut self, pred: impl Fn(&str) -> bool) -> usize {
        let start = self.pos;
        while let Some(line) = self.peek() {
            if !pred(line) {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }
}

/// Whether a line holds nothing but whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
