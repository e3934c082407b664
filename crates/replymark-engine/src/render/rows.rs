use serde::Serialize;

use crate::parsing::{
    blocks::Block,
    inline::{InlineFormatter, escape_html},
};

use super::DEFAULT_EMPTY_PLACEHOLDER;

/// One flat key/value entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub key: String,
    pub value: String,
    /// The value is over the length threshold or spans several lines.
    pub long: bool,
}

impl Row {
    pub const DEFAULT_LONG_THRESHOLD: usize = 120;

    pub fn new(key: impl Into<String>, value: impl Into<String>, threshold: usize) -> Self {
        let value = value.into();
        let long = value.chars().count() > threshold || value.contains('\n');
        Self {
            key: key.into(),
            value,
            long,
        }
    }
}

/// Projects blocks onto flat rows keyed by block kind.
///
/// Lists yield one row per item and tables one row per line (header first),
/// with formatted cells joined by ` | `. Every other block yields one row.
#[derive(Debug, Clone)]
pub struct RowsRenderer {
    threshold: usize,
    empty_placeholder: String,
    formatter: InlineFormatter,
}

impl Default for RowsRenderer {
    fn default() -> Self {
        Self {
            threshold: Row::DEFAULT_LONG_THRESHOLD,
            empty_placeholder: DEFAULT_EMPTY_PLACEHOLDER.to_string(),
            formatter: InlineFormatter::default(),
        }
    }
}

impl RowsRenderer {
    pub fn new(threshold: usize, empty_placeholder: impl Into<String>, formatter: InlineFormatter) -> Self {
        Self {
            threshold,
            empty_placeholder: empty_placeholder.into(),
            formatter,
        }
    }

    pub fn render(&self, blocks: &[Block]) -> Vec<Row> {
        let mut rows = vec![];
        for block in blocks {
            self.push_block(block, &mut rows);
        }
        log::debug!("projected {} blocks onto {} rows", blocks.len(), rows.len());
        rows
    }

    fn push_block(&self, block: &Block, rows: &mut Vec<Row>) {
        let key = block.kind_name();
        let row = |value: String| Row::new(key, value, self.threshold);

        match block {
            Block::Heading { text, .. } | Block::Paragraph { text } | Block::BlockQuote { text } => {
                rows.push(row(self.formatter.format(text)));
            }
            Block::CodeBlock { text, .. } => rows.push(row(escape_html(text))),
            Block::List { items, .. } => {
                rows.extend(items.iter().map(|item| row(self.formatter.format(item))));
            }
            Block::Table { header, rows: body } => {
                for cells in std::iter::once(header).chain(body) {
                    let line = cells
                        .iter()
                        .map(|c| self.formatter.format(c))
                        .collect::<Vec<_>>()
                        .join(" | ");
                    rows.push(row(line));
                }
            }
            Block::NoContent => rows.push(row(escape_html(&self.empty_placeholder))),
        }
    }
}
