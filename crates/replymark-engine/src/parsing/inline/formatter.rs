use super::{
    cleanup::{drop_dangling_markers, strip_stray_asterisks},
    escape::escape_html,
    kinds::{CodeSpan, Emphasis, Link},
    protect::Protected,
};

/// Options for [`InlineFormatter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineOptions {
    /// Open links in a new browsing context (`target="_blank"` plus `rel`).
    pub external_links: bool,
}

impl Default for InlineOptions {
    fn default() -> Self {
        Self {
            external_links: true,
        }
    }
}

/// Turns the raw text of a block field into display-safe HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineFormatter {
    options: InlineOptions,
}

impl InlineFormatter {
    pub fn new(options: InlineOptions) -> Self {
        Self { options }
    }

    /// Formats `raw`. Total and deterministic.
    ///
    /// Order matters: escaping precedes every substitution so emitted tags are
    /// never escaped, and code spans are protected before links and emphasis so
    /// their content is never reinterpreted. Leftover markers are only cleaned
    /// up once the real substitutions have consumed every pair.
    pub fn format(&self, raw: &str) -> String {
        let mut protected = Protected::default();

        let text = strip_stray_asterisks(raw);
        let text = escape_html(&text);
        let text = CodeSpan::protect(&text, &mut protected);
        let text = Link::rewrite(&text, &mut protected, self.options.external_links);
        let text = Emphasis::bold(&text);
        let text = Emphasis::italic(&text);
        let text = drop_dangling_markers(&text);
        let text = protected.restore(&text);

        text.replace('\n', "<br>")
    }
}

/// Formats `raw` with default options.
pub fn format_inline(raw: &str) -> String {
    InlineFormatter::default().format(raw)
}
