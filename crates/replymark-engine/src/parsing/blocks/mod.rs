//! # Block Parsing
//!
//! Single forward pass over the normalized line sequence.
//!
//! ## Modules
//!
//! - **`types`**: the `Block` enum produced by the parser
//! - **`kinds`**: block-specific types owning their delimiters and line consumption
//!   (CodeFence, Heading, BlockQuote, Table, ListKind, Paragraph)
//! - **`open`**: `try_open` dispatch deciding which block starts at the cursor
//! - **`builder`**: `BlockBuilder` loop that emits blocks in source order
//!
//! ## Key Invariants
//!
//! - Matchers run in a fixed precedence order; the first match wins
//! - The cursor never moves backwards, every non-blank line lands in exactly one block
//! - Fenced code blocks are raw zones: no block or inline parsing inside

pub mod builder;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use open::{BlockOpen, try_open};
pub use types::{Block, LineSpan, SpannedBlock};
