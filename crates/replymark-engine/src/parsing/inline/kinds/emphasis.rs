use std::sync::LazyLock;

use regex::Regex;

/// Bold (`**x**`, `__x__`) and italic (`*x*`, `_x_`) markers.
pub struct Emphasis;

static BOLD_STARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*\n]+)\*\*").expect("valid regex"));
static BOLD_UNDERSCORES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__([^_\n]+)__").expect("valid regex"));

// The opening marker must not follow a word character. The closing side is
// checked by hand in `italic_with` since the regex engine has no lookahead.
static ITALIC_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^0-9A-Za-z_])\*([^*\n]+)\*").expect("valid regex"));
static ITALIC_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^0-9A-Za-z_])_([^_\n]+)_").expect("valid regex"));

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl Emphasis {
    pub const STAR: char = '*';
    pub const UNDERSCORE: char = '_';

    /// Converts `**x**` and `__x__` (single line, non-greedy) into `<strong>`.
    pub fn bold(text: &str) -> String {
        let text = BOLD_STARS.replace_all(text, "<strong>${1}</strong>");
        BOLD_UNDERSCORES
            .replace_all(&text, "<strong>${1}</strong>")
            .into_owned()
    }

    /// Converts `*x*` and `_x_` into `<em>` when neither side touches a word character.
    pub fn italic(text: &str) -> String {
        let text = Self::italic_with(text, &ITALIC_STAR);
        Self::italic_with(&text, &ITALIC_UNDERSCORE)
    }

    fn italic_with(text: &str, re: &Regex) -> String {
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut at = 0;

        while let Some(caps) = re.captures_at(text, at) {
            let Some(whole) = caps.get(0) else { break };
            let closes_on_word = text[whole.end()..].chars().next().is_some_and(is_word_char);
            if closes_on_word {
                // Retry one char further on, as a lookahead failure would.
                at = whole.start()
                    + text[whole.start()..]
                        .chars()
                        .next()
                        .map_or(1, char::len_utf8);
                continue;
            }
            out.push_str(&text[copied..whole.start()]);
            out.push_str(&caps[1]);
            out.push_str("<em>");
            out.push_str(&caps[2]);
            out.push_str("</em>");
            copied = whole.end();
            at = whole.end();
        }

        out.push_str(&text[copied..]);
        out
    }
}
