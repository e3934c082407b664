//! # Inline Kinds
//!
//! Inline constructs that own their syntax and their substitution pass.
//!
//! - **`CodeSpan`**: `` ` `` delimited raw zone, protected before anything else runs
//! - **`Link`**: `[label](url)` with http/https validation
//! - **`Emphasis`**: `**bold**`, `__bold__`, `*italic*`, `_italic_`

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
