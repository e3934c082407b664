use crate::parsing::{blocks::types::Block, lines::LineReader};

/// Fenced code block. Raw zone: nothing inside is parsed.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Whether `line` opens a fence (leading whitespace allowed).
    pub fn opens(line: &str) -> bool {
        line.trim_start().starts_with(Self::BACKTICKS)
    }

    /// Whether `line` closes an open fence. Any info string after the marker is ignored.
    pub fn closes(line: &str) -> bool {
        line.trim().starts_with(Self::BACKTICKS)
    }

    /// The language token: first whitespace-delimited word after the opening marker.
    pub fn lang(opening: &str) -> &str {
        opening
            .trim()
            .strip_prefix(Self::BACKTICKS)
            .and_then(|rest| rest.split_whitespace().next())
            .unwrap_or("")
    }

    /// Consumes the fence starting at the cursor. An unclosed fence runs to end of input.
    pub fn parse(reader: &mut LineReader<'_>) -> Block {
        let opening = reader.advance().unwrap_or_default();
        let mut code_lines = vec![];

        while let Some(line) = reader.peek() {
            reader.advance();
            if Self::closes(line) {
                break;
            }
            code_lines.push(line);
        }

        Block::CodeBlock {
            lang: Self::lang(opening).to_string(),
            text: code_lines.join("\n"),
        }
    }
}
