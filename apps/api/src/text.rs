//! Plain-text normalisation shared by PDF extraction and model-output cleaning.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static HORIZONTAL_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\u{a0}\f\v]+").unwrap());
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());
static PARAGRAPH_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*|\*|`").unwrap());
// `__x__` only when both markers sit on word boundaries, so `snake__case` survives.
static UNDERSCORE_EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b__([^_\s](?:[^_]*[^_\s])?)__\b").unwrap());
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{1,6}[ \t]*").unwrap());

/// Collapses whitespace while keeping line structure.
///
/// Carriage returns are normalised to `\n`, runs of spaces and tabs become a
/// single space, every line is trimmed, and consecutive blank lines fold
/// into one line break.
pub fn collapse_whitespace(input: &str) -> String {
    let unified = input.replace("\r\n", "\n").replace('\r', "\n");
    let spaced = HORIZONTAL_WS.replace_all(&unified, " ");
    let trimmed_lines: Vec<&str> = spaced.lines().map(str::trim).collect();
    let joined = trimmed_lines.join("\n");
    BLANK_LINES.replace_all(&joined, "\n").trim().to_string()
}

/// Like `collapse_whitespace`, but keeps a single empty line between
/// paragraphs so model answers stay readable as lists.
pub fn collapse_paragraphs(input: &str) -> String {
    let unified = input.replace("\r\n", "\n").replace('\r', "\n");
    let spaced = HORIZONTAL_WS.replace_all(&unified, " ");
    let trimmed_lines: Vec<&str> = spaced.lines().map(str::trim).collect();
    let joined = trimmed_lines.join("\n");
    PARAGRAPH_BREAKS.replace_all(&joined, "\n\n").trim().to_string()
}

/// Truncates to at most `max_chars` Unicode scalar values.
pub fn truncate_chars(input: &str, max_chars: usize) -> String {
    match input.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => input[..byte_idx].to_string(),
        None => input.to_string(),
    }
}

/// Lowercase single words like `init` or `name` are Python dunder names, not bold text.
fn is_dunder_name(inner: &str) -> bool {
    inner.starts_with(|c: char| c.is_ascii_lowercase())
        && inner
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

/// Strips markdown emphasis and heading markers from generated text and
/// tidies the whitespace.
pub fn clean_generated_text(input: &str) -> String {
    let without_headings = HEADING.replace_all(input, "");
    let without_underscores =
        UNDERSCORE_EMPHASIS.replace_all(&without_headings, |caps: &Captures| {
            let inner = &caps[1];
            if is_dunder_name(inner) {
                caps[0].to_string()
            } else {
                inner.to_string()
            }
        });
    let without_emphasis = EMPHASIS.replace_all(&without_underscores, "");
    collapse_paragraphs(&without_emphasis)
}
