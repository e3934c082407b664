use crate::parsing::{blocks::types::Block, lines::LineReader};

/// Single-level block quote.
///
/// All quote syntax knowledge lives here, not in the dispatch code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn opens(line: &str) -> bool {
        line.trim_start().starts_with(Self::PREFIX)
    }

    /// Strips leading whitespace, one `>`, and at most one following whitespace character.
    ///
    /// Further `>` markers are kept as text: quotes do not nest.
    pub fn strip_prefix(line: &str) -> &str {
        let Some(rest) = line.trim_start().strip_prefix(Self::PREFIX) else {
            return line;
        };
        rest.strip_prefix(char::is_whitespace).unwrap_or(rest)
    }

    /// Consumes contiguous quote lines.
    pub fn parse(reader: &mut LineReader<'_>) -> Block {
        let mut quoted = vec![];
        while let Some(line) = reader.peek().filter(|l| Self::opens(l)) {
            quoted.push(Self::strip_prefix(line));
            reader.advance();
        }
        Block::BlockQuote {
            text: quoted.join("\n"),
        }
    }
}
