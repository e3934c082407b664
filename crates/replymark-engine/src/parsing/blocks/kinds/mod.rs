//! # Block Kinds
//!
//! Block-specific types that own their syntax: each kind knows its delimiters,
//! how to recognise its opening line, and how to consume its lines from a
//! [`LineReader`](crate::parsing::lines::LineReader).

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::ListKind;
pub use paragraph::Paragraph;
pub use table::Table;
