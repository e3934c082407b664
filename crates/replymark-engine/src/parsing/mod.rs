pub mod blocks;
pub mod inline;
pub mod lines;
pub mod source;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder};
use source::normalize_source;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
}

/// Normalizes `source` and splits it into blocks.
///
/// Never fails. Input with no content yields a single [`Block::NoContent`].
pub fn parse_document(source: &str) -> ParsedDoc {
    let normalized = normalize_source(source);
    let blocks = BlockBuilder::new(&normalized).finish();
    log::debug!(
        "parsed {} blocks from {} bytes of source",
        blocks.len(),
        source.len()
    );
    ParsedDoc { blocks }
}
