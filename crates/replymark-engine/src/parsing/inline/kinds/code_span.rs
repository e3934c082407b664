use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::parsing::inline::protect::Protected;

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: their content is protected before any other
/// substitution runs.
pub struct CodeSpan;

/// Single backtick pair with no backtick or newline inside.
static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+)`").expect("valid regex"));

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';

    /// Replaces each code span in already-escaped `text` with a placeholder
    /// whose fragment is `<code>…</code>`.
    pub fn protect(text: &str, protected: &mut Protected) -> String {
        if !text.contains(Self::TICK) {
            return text.to_string();
        }
        CODE_SPAN
            .replace_all(text, |caps: &Captures<'_>| {
                protected.insert(format!("<code>{}</code>", &caps[1]))
            })
            .into_owned()
    }
}
