//! Renders loosely formatted assistant replies as safe HTML.
//!
//! ```rust
//! let html = replymark_engine::render("# Title\n\nSome **bold** text.");
//! assert_eq!(html, "<h1>Title</h1><p>Some <strong>bold</strong> text.</p>");
//! ```

pub mod parsing;
pub mod payload;
pub mod render;

// Re-export key types for easier usage
pub use parsing::{
    ParsedDoc,
    blocks::Block,
    inline::{InlineFormatter, InlineOptions, format_inline},
    parse_document,
};
pub use payload::{PayloadError, Reply, stringify_value};
pub use render::{HtmlOptions, HtmlRenderer, Row, RowsRenderer, render};
