//! # Inline Formatting
//!
//! Turns the raw text of a heading, paragraph, quote, list item or table cell
//! into display-safe HTML. Code blocks never come through here.
//!
//! ## Pipeline
//!
//! 1. strip stray asterisks (`cleanup`)
//! 2. escape `& < > " '` (`escape`)
//! 3. protect code spans behind placeholders (`kinds::code_span`, `protect`)
//! 4. rewrite links, validating http/https urls (`kinds::link`)
//! 5. bold, then 6. italic (`kinds::emphasis`)
//! 7. drop unpaired markers (`cleanup`)
//! 8. restore placeholders, then 9. `\n` becomes `<br>`
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `*not bold*` `` renders the asterisks inside
//! `<code>`, never as emphasis.

pub mod cleanup;
pub mod cursor;
pub mod escape;
pub mod formatter;
pub mod kinds;
pub mod protect;

pub use escape::escape_html;
pub use formatter::{InlineFormatter, InlineOptions, format_inline};
