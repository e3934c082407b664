use crate::parsing::lines::LineReader;

use super::{
    kinds::{BlockQuote, CodeFence, Heading, Paragraph, Table},
    open::{BlockOpen, try_open},
    types::{Block, LineSpan, SpannedBlock},
};

/// Drives block construction over a [`LineReader`].
///
/// Each [`BlockBuilder::step`] looks at the cursor, picks the block that opens
/// there and lets that kind consume its lines.
pub struct BlockBuilder<'a> {
    reader: LineReader<'a>,
    out: Vec<SpannedBlock>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            reader: LineReader::new(source),
            out: vec![],
        }
    }

    /// Consumes the next block (or blank separator). Returns false at end of input.
    pub fn step(&mut self) -> bool {
        let Some(open) = try_open(&self.reader) else {
            return false;
        };
        let start = self.reader.position();

        let block = match open {
            BlockOpen::Blank => {
                self.reader.advance();
                return true;
            }
            BlockOpen::CodeFence => CodeFence::parse(&mut self.reader),
            BlockOpen::Heading => Heading::parse(&mut self.reader),
            BlockOpen::BlockQuote => BlockQuote::parse(&mut self.reader),
            BlockOpen::Table => Table::parse(&mut self.reader),
            BlockOpen::List(kind) => kind.parse(&mut self.reader),
            BlockOpen::Paragraph => Paragraph::parse(&mut self.reader),
        };
        let span = LineSpan {
            start,
            end: self.reader.position(),
        };
        log::trace!("{} block on lines {span:?}", block.kind_name());
        self.out.push(SpannedBlock { span, block });
        true
    }

    /// Runs to end of input, keeping the line span of every block.
    ///
    /// A document with no blocks yields a single [`Block::NoContent`] with an
    /// empty span.
    pub fn finish_spanned(mut self) -> Vec<SpannedBlock> {
        while self.step() {}
        if self.out.is_empty() {
            self.out.push(SpannedBlock {
                span: LineSpan { start: 0, end: 0 },
                block: Block::NoContent,
            });
        }
        self.out
    }

    /// Runs to end of input. A document with no blocks yields [`Block::NoContent`].
    pub fn finish(self) -> Vec<Block> {
        self.finish_spanned()
            .into_iter()
            .map(|sb| sb.block)
            .collect()
    }
}
