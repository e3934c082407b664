use crate::parsing::lines::{LineReader, is_blank};

use super::kinds::{BlockQuote, CodeFence, Heading, ListKind, Table};

/// The block type that starts at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen {
    Blank,
    CodeFence,
    Heading,
    BlockQuote,
    Table,
    List(ListKind),
    Paragraph,
}

/// Decides which block starts at the cursor, or `None` at end of input.
///
/// Precedence, first match wins: blank, fence, heading, quote, table,
/// unordered list, ordered list, paragraph.
pub fn try_open(reader: &LineReader<'_>) -> Option<BlockOpen> {
    let line = reader.peek()?;
    let open = if is_blank(line) {
        BlockOpen::Blank
    } else if CodeFence::opens(line) {
        BlockOpen::CodeFence
    } else if Heading::opens(line) {
        BlockOpen::Heading
    } else if BlockQuote::opens(line) {
        BlockOpen::BlockQuote
    } else if Table::starts_at(reader, 0) {
        BlockOpen::Table
    } else if ListKind::Unordered.opens(line) {
        BlockOpen::List(ListKind::Unordered)
    } else if ListKind::Ordered.opens(line) {
        BlockOpen::List(ListKind::Ordered)
    } else {
        BlockOpen::Paragraph
    };
    Some(open)
}

/// Whether the line `n` past the cursor starts a fence, heading, quote or list.
pub fn starts_non_table_block(reader: &LineReader<'_>, n: usize) -> bool {
    reader.peek_nth(n).is_some_and(|line| {
        CodeFence::opens(line)
            || Heading::opens(line)
            || BlockQuote::opens(line)
            || ListKind::Unordered.opens(line)
            || ListKind::Ordered.opens(line)
    })
}

/// Whether the line `n` past the cursor ends a paragraph or list item
/// continuation by starting a block of its own.
pub fn interrupts(reader: &LineReader<'_>, n: usize) -> bool {
    starts_non_table_block(reader, n) || Table::starts_at(reader, n)
}
