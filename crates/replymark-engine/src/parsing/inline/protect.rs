use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Opens a placeholder token. Private-use, so it never occurs in formatted text.
pub const PLACEHOLDER_OPEN: char = '\u{E000}';
/// Closes a placeholder token.
pub const PLACEHOLDER_CLOSE: char = '\u{E001}';

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\u{E000}([0-9]+)\u{E001}").expect("valid regex"));

/// Whether `c` is part of a placeholder token's delimiters.
pub fn is_sentinel(c: char) -> bool {
    c == PLACEHOLDER_OPEN || c == PLACEHOLDER_CLOSE
}

/// Rendered fragments hidden from later substitution passes.
///
/// A fragment is swapped for an opaque token when inserted and put back by
/// [`Protected::restore`] once every substitution has run.
#[derive(Debug, Default)]
pub struct Protected {
    fragments: Vec<String>,
}

impl Protected {
    /// Stores `fragment` and returns the token that stands in for it.
    pub fn insert(&mut self, fragment: String) -> String {
        let token = format!(
            "{PLACEHOLDER_OPEN}{}{PLACEHOLDER_CLOSE}",
            self.fragments.len()
        );
        self.fragments.push(fragment);
        token
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Replaces every token in `text` with its stored fragment.
    pub fn restore(&self, text: &str) -> String {
        if self.is_empty() {
            return text.to_string();
        }
        PLACEHOLDER
            .replace_all(text, |caps: &Captures<'_>| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| self.fragments.get(i))
                    .cloned()
                    .unwrap_or_default()
            })
            .into_owned()
    }
}
