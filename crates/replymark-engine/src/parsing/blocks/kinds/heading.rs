use crate::parsing::{blocks::types::Block, lines::LineReader};

/// ATX heading: up to three leading spaces, 1 to 6 `#`, whitespace, non-empty text.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;
    const MAX_INDENT: usize = 3;

    /// Splits a heading line into its level and trimmed text.
    pub fn split(line: &str) -> Option<(u8, &str)> {
        let rest = line.trim_start();
        let indent = &line[..line.len() - rest.len()];
        if indent.chars().count() > Self::MAX_INDENT {
            return None;
        }

        let hashes = rest.chars().take_while(|&c| c == Self::MARKER).count();
        let level = u8::try_from(hashes)
            .ok()
            .filter(|l| (1..=Self::MAX_LEVEL).contains(l))?;

        let after = &rest[hashes..];
        let text = after.trim();
        if !after.starts_with(char::is_whitespace) || text.is_empty() {
            return None;
        }
        Some((level, text))
    }

    pub fn opens(line: &str) -> bool {
        Self::split(line).is_some()
    }

    pub fn parse(reader: &mut LineReader<'_>) -> Block {
        let line = reader.advance().unwrap_or_default();
        let (level, text) = Self::split(line).unwrap_or((1, line.trim()));
        Block::Heading {
            level,
            text: text.to_string(),
        }
    }
}
