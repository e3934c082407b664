//! # Document Projection
//!
//! Two output modes over the same parsed blocks:
//!
//! - **`html`**: [`HtmlRenderer`] produces an HTML fragment
//! - **`rows`**: [`RowsRenderer`] produces flat key/value [`Row`]s
//!
//! Both call the inline formatter on every text-bearing field except code
//! blocks, which are escaped and nothing else.
//!
//! ```rust
//! # use replymark_engine::render::{HtmlRenderer, RowsRenderer};
//! # use replymark_engine::parsing::parse_document;
//! let doc = parse_document("## Done\n\n- **one**\n- two");
//!
//! let html = HtmlRenderer::default().render(&doc.blocks);
//! assert_eq!(html, "<h2>Done</h2><ul><li><strong>one</strong></li><li>two</li></ul>");
//!
//! let rows = RowsRenderer::default().render(&doc.blocks);
//! assert_eq!(rows.len(), 3);
//! ```

pub mod html;
pub mod rows;

pub use html::{HtmlOptions, HtmlRenderer, render};
pub use rows::{Row, RowsRenderer};

/// Text shown when a reply has no content.
pub const DEFAULT_EMPTY_PLACEHOLDER: &str = "No response returned.";
