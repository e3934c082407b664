use crate::parsing::{
    blocks::{open::interrupts, types::Block},
    lines::{LineReader, is_blank},
};

/// Which list marker family a list uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `-`, `+` or `*` bullets.
    Unordered,
    /// `1.` or `1)` style numbers.
    Ordered,
}

impl ListKind {
    pub const BULLETS: [char; 3] = ['-', '+', '*'];
    pub const NUMBER_DELIMITERS: [char; 2] = ['.', ')'];

    pub fn is_ordered(self) -> bool {
        matches!(self, ListKind::Ordered)
    }

    /// Returns the trimmed item text when `line` is an item of this kind.
    pub fn item_text(self, line: &str) -> Option<&str> {
        let rest = line.trim_start();
        let after_marker = match self {
            ListKind::Unordered => rest.strip_prefix(Self::BULLETS)?,
            ListKind::Ordered => {
                let digits = rest.chars().take_while(char::is_ascii_digit).count();
                if digits == 0 {
                    return None;
                }
                rest[digits..].strip_prefix(Self::NUMBER_DELIMITERS)?
            }
        };
        if !after_marker.starts_with(char::is_whitespace) {
            return None;
        }
        Some(after_marker.trim())
    }

    pub fn opens(self, line: &str) -> bool {
        self.item_text(line).is_some()
    }

    /// Consumes a whole list of this kind.
    ///
    /// Non-blank lines that start no other block are lazy continuations of the
    /// current item and are joined to it with a single space. Blank lines between
    /// items of the same kind do not end the list.
    pub fn parse(self, reader: &mut LineReader<'_>) -> Block {
        let mut items = vec![];

        while let Some(first) = reader.peek().and_then(|l| self.item_text(l)) {
            reader.advance();
            let mut item = first.to_string();

            while let Some(next) = reader.peek() {
                if is_blank(next) || interrupts(reader, 0) {
                    break;
                }
                item.push(' ');
                item.push_str(next.trim());
                reader.advance();
            }
            items.push(item);

            reader.skip_while(is_blank);
        }

        Block::List {
            ordered: self.is_ordered(),
            items,
        }
    }
}
