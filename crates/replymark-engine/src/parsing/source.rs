//! Source normalization applied once before block parsing.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::kinds::CodeFence;

static ZERO_WIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[\u{200B}-\u{200D}\u{FEFF}]").expect("valid regex"));

/// Two or more blank (or whitespace-only) lines in a row.
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n){2,}").expect("valid regex"));

/// Normalizes raw reply text into the form the block parser expects.
///
/// - unifies line endings to `\n`
/// - drops zero-width characters and the byte-order mark
/// - empties lines made only of `*` (generation artifacts)
/// - removes lone `*` characters surrounded by whitespace, keeping list bullets
/// - leaves lines inside fenced code as written
/// - collapses runs of blank lines to a single blank line
/// - trims the result
///
/// Normalizing an already normalized string returns it unchanged.
pub fn normalize_source(raw: &str) -> String {
    let text = raw.replace("\r\n", "\n").replace('\r', "\n");
    let text = ZERO_WIDTH.replace_all(&text, "");
    let text = strip_outside_fences(&text);
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}

fn strip_outside_fences(text: &str) -> String {
    let mut in_fence = false;
    let mut lines = Vec::new();
    for line in text.split('\n') {
        if in_fence {
            in_fence = !CodeFence::closes(line);
            lines.push(line.to_string());
        } else {
            in_fence = CodeFence::opens(line);
            lines.push(strip_asterisk_artifacts(line));
        }
    }
    lines.join("\n")
}

fn strip_asterisk_artifacts(line: &str) -> String {
    let trimmed = line.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c == '*' || c.is_whitespace()) {
        return String::new();
    }

    let chars: Vec<char> = line.chars().collect();
    let bullet = chars
        .iter()
        .position(|c| !c.is_whitespace())
        .filter(|&i| chars[i] == '*' && chars.get(i + 1).is_some_and(|c| c.is_whitespace()));

    let mut out = String::with_capacity(line.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '*' && Some(i) != bullet {
            let before = i.checked_sub(1).map(|j| chars[j]);
            let after = chars.get(i + 1).copied();
            if before.is_none_or(char::is_whitespace) && after.is_none_or(char::is_whitespace) {
                continue;
            }
        }
        out.push(c);
    }
    out
}
