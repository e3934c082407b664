use crate::parsing::{
    blocks::{open::starts_non_table_block, types::Block},
    lines::{LineReader, is_blank},
};

/// Pipe table: a header row, a divider row, then body rows.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';
    const DIVIDER_DASH: char = '-';

    /// A divider holds only `:`, `-`, `|` and whitespace, with at least one `-`.
    pub fn is_divider(line: &str) -> bool {
        let t = line.trim();
        t.contains(Self::DIVIDER_DASH)
            && t.chars()
                .all(|c| matches!(c, ':' | '-' | '|') || c.is_whitespace())
    }

    /// Whether a table starts `n` lines past the cursor.
    ///
    /// Any line containing a pipe counts as a header as long as a divider follows it.
    pub fn starts_at(reader: &LineReader<'_>, n: usize) -> bool {
        reader.peek_nth(n).is_some_and(|l| l.contains(Self::PIPE))
            && reader.peek_nth(n + 1).is_some_and(Self::is_divider)
    }

    /// Splits a row into trimmed cells, ignoring one leading and one trailing pipe.
    pub fn split_row(line: &str) -> Vec<String> {
        let t = line.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = t.strip_suffix(Self::PIPE).unwrap_or(t);
        t.split(Self::PIPE).map(|c| c.trim().to_string()).collect()
    }

    fn is_body_row(reader: &LineReader<'_>) -> bool {
        reader
            .peek()
            .is_some_and(|l| !is_blank(l) && l.contains(Self::PIPE))
            && !starts_non_table_block(reader, 0)
    }

    /// Consumes header, divider and contiguous body rows.
    ///
    /// Body rows are recorded with whatever cell count they have.
    pub fn parse(reader: &mut LineReader<'_>) -> Block {
        let header = Self::split_row(reader.advance().unwrap_or_default());
        reader.advance(); // divider

        let mut rows = vec![];
        while Self::is_body_row(reader) {
            if let Some(line) = reader.advance() {
                rows.push(Self::split_row(line));
            }
        }

        Block::Table { header, rows }
    }
}
