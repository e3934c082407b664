use crate::parsing::{
    blocks::{open::interrupts, types::Block},
    lines::{LineReader, is_blank},
};

/// Paragraph block type.
///
/// Paragraphs have no delimiters: they are the fallback when no other block
/// opener matches. Inline formatting is applied to paragraph text.
pub struct Paragraph;

impl Paragraph {
    /// Consumes the line at the cursor plus every following line that is
    /// neither blank nor the start of another block. Lines are trimmed and
    /// joined with `\n` (soft breaks).
    pub fn parse(reader: &mut LineReader<'_>) -> Block {
        let mut parts = vec![reader.advance().unwrap_or_default().trim()];

        while let Some(line) = reader.peek() {
            if is_blank(line) || interrupts(reader, 0) {
                break;
            }
            parts.push(line.trim());
            reader.advance();
        }

        Block::Paragraph {
            text: parts.join("\n"),
        }
    }
}
