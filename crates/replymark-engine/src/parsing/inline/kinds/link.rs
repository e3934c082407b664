use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::parsing::inline::{
    escape::{escape_attribute, unescape},
    protect::{Protected, is_sentinel},
};

/// Markdown link `[label](url)`.
pub struct Link;

/// The url may hold one level of balanced parentheses, so
/// `[x](javascript:alert(1))` is recognised whole and then rejected.
static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]\n]+)\]\(((?:[^\s()]|\([^\s()]*\))+)\)").expect("valid regex")
});

static HTTP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://[^\s/?#]+").expect("valid regex"));

impl Link {
    pub const REL: &'static str = "noopener noreferrer";

    /// Returns the attribute-escaped url when `url` (as found in escaped text)
    /// is an absolute http or https URL.
    ///
    /// A url holding a placeholder (a code span) is rejected: fragments are
    /// restored in one pass and never nest inside an attribute.
    pub fn sanitize_url(url: &str) -> Option<String> {
        if url.contains(is_sentinel) {
            return None;
        }
        let decoded = unescape(url);
        let normalized = decoded.trim();
        if !HTTP_URL.is_match(normalized) {
            return None;
        }
        Some(escape_attribute(normalized).into_owned())
    }

    /// Rewrites links in escaped `text`.
    ///
    /// A link with a valid url becomes an anchor whose opening tag is protected
    /// from later passes; the label stays in the text so it can still be
    /// emphasised. A link with any other url degrades to its label.
    ///
    /// Emphasis markers are matched after this pass without regard to the
    /// anchor, so `*see [docs*](url)` yields `<em>` closing inside `<a>`.
    pub fn rewrite(text: &str, protected: &mut Protected, external: bool) -> String {
        if !text.contains('[') {
            return text.to_string();
        }
        LINK.replace_all(text, |caps: &Captures<'_>| {
            let label = &caps[1];
            let Some(href) = Self::sanitize_url(&caps[2]) else {
                log::debug!("dropping link with unsupported url: {}", &caps[2]);
                return label.to_string();
            };
            let open = if external {
                format!(r#"<a href="{href}" target="_blank" rel="{}">"#, Self::REL)
            } else {
                format!(r#"<a href="{href}">"#)
            };
            format!("{}{label}</a>", protected.insert(open))
        })
        .into_owned()
    }
}
