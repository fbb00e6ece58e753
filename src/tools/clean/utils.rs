/// Private helper functions for text normalization
use once_cell::sync::Lazy;
use regex::Regex;

// Unicode-aware: also matches NBSP and the other Zs separators.
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Longest entity looked back for when a `;` arrives (`&CounterClockwiseContourIntegral;` is 33).
const MAX_ENTITY_CHARS: usize = 40;

/// Whole-string passes run after the streaming decode.
const MAX_EXTRA_PASSES: usize = 4;

/// Decode HTML entities (named and numeric) once.
pub(super) fn decode_html_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Decode until a fixpoint, so `&amp;amp;` ends up as `&`.
///
/// Runs in linear time: decoded text is pushed back onto the input, so a
/// nested chain like `&amp;amp;amp;...` unwinds in one left-to-right sweep
/// instead of one whole-string pass per layer.
pub(super) fn decode_entities_fully(text: &str) -> String {
    let mut current = decode_entities_streaming(text);
    // Catches entities the sweep cannot see (no `;`, or longer than the look-back).
    for _ in 0..MAX_EXTRA_PASSES {
        let next = decode_html_entities(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn decode_entities_streaming(text: &str) -> String {
    let mut pending: Vec<char> = text.chars().rev().collect();
    let mut out = String::with_capacity(text.len());

    while let Some(ch) = pending.pop() {
        out.push(ch);
        if ch != ';' {
            continue;
        }
        let Some(start) = entity_start(&out) else {
            continue;
        };
        let decoded = html_escape::decode_html_entities(&out[start..]);
        // Every decode shrinks the text, which bounds the number of rewinds.
        if decoded.len() < out.len() - start {
            let decoded = decoded.into_owned();
            out.truncate(start);
            pending.extend(decoded.chars().rev());
        }
    }
    out
}

/// Byte offset of the `&` that could open an entity ending at the last char.
fn entity_start(out: &str) -> Option<usize> {
    out.char_indices()
        .rev()
        .take(MAX_ENTITY_CHARS)
        .find(|(_, c)| *c == '&')
        .map(|(i, _)| i)
}

/// Collapse whitespace runs to a single space and trim.
pub(super) fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, " ").trim().to_string()
}
