//! Removal of stray and unpaired emphasis markers.

use std::sync::LazyLock;

use regex::Regex;

use super::{cursor::Cursor, kinds::Emphasis, protect::is_sentinel};

static SPACED_ASTERISK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\*\s+").expect("valid regex"));

/// Strips asterisks that generation left floating between words.
///
/// Runs before escaping. Also drops placeholder sentinels so raw text can
/// never forge a protected fragment.
pub fn strip_stray_asterisks(raw: &str) -> String {
    let text: String = raw.chars().filter(|&c| !is_sentinel(c)).collect();
    let text = SPACED_ASTERISK.replace_all(&text, " ");

    let mut cur = Cursor::new(&text);
    let mut out = String::with_capacity(text.len());
    while let Some(c) = cur.peek() {
        let lone = c == '*'
            && cur.prev().is_none_or(char::is_whitespace)
            && {
                let mut ahead = cur.clone();
                ahead.bump();
                ahead.peek().is_none_or(char::is_whitespace)
            };
        cur.bump();
        if !lone {
            out.push(c);
        }
    }
    out
}

fn is_marker(c: char) -> bool {
    c == Emphasis::STAR || c == Emphasis::UNDERSCORE
}

fn opens_boundary(prev: Option<char>) -> bool {
    prev.is_none_or(|c| c.is_whitespace() || c == '>' || is_sentinel(c))
}

fn closes_boundary(next: Option<char>) -> bool {
    next.is_none_or(|c| c.is_whitespace() || c == '<' || is_sentinel(c))
}

/// Deletes marker runs (`*`, `**`, `_`, `__`, ...) left over after emphasis
/// substitution that touch whitespace, a tag edge, a placeholder or the
/// string boundary on either side. Markers inside words are kept.
pub fn drop_dangling_markers(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = drop_dangling_pass(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn drop_dangling_pass(text: &str) -> String {
    let mut cur = Cursor::new(text);
    let mut out = String::with_capacity(text.len());
    while let Some(c) = cur.peek() {
        if !is_marker(c) {
            out.push(c);
            cur.bump();
            continue;
        }
        let run = cur.eat_while(|x| x == c);
        if !opens_boundary(out.chars().next_back()) && !closes_boundary(cur.peek()) {
            out.push_str(run);
        }
    }
    out
}
