use serde::Serialize;

/// A parsed block of the reply document.
///
/// Text-bearing fields hold raw, unformatted text. Inline formatting is applied
/// by the renderers, never by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// An ATX heading (`#` through `######`).
    Heading {
        /// Number of `#` markers, 1 to 6.
        level: u8,
        text: String,
    },
    /// Contiguous text lines, joined by `\n`.
    Paragraph { text: String },
    /// A fenced code block. Raw zone: the text is never inline-formatted.
    CodeBlock {
        /// First word after the opening fence, or empty.
        lang: String,
        text: String,
    },
    /// Quoted lines with their `>` markers stripped, joined by `\n`.
    BlockQuote { text: String },
    /// A single-level list. Lazy continuation lines are folded into items.
    List { ordered: bool, items: Vec<String> },
    /// A pipe table. Rows are kept as written, whatever their width.
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Placeholder emitted alone when the source has no content.
    NoContent,
}

impl Block {
    /// Short name of the block variant, as used in flat output rows.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::CodeBlock { .. } => "code",
            Block::BlockQuote { .. } => "blockquote",
            Block::List { ordered: true, .. } => "ordered_list",
            Block::List { ordered: false, .. } => "list",
            Block::Table { .. } => "table",
            Block::NoContent => "no_content",
        }
    }
}

/// A half-open range `[start, end)` of line indices in the normalized source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineSpan {
    /// First line of the block.
    pub start: usize,
    /// One past the last line of the block.
    pub end: usize,
}

impl LineSpan {
    /// Number of lines covered. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(self, line: usize) -> bool {
        (self.start..self.end).contains(&line)
    }
}

/// A block together with the lines it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedBlock {
    pub span: LineSpan,
    pub block: Block,
}
