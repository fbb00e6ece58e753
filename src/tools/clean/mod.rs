mod utils;


use utils::*;

/// Normalize text for display.
///
/// Performs the following operations in order:
/// 1. Decode HTML entities (`&amp;` → `&`, `&#39;` → `'`) until nothing changes
/// 2. Collapse every whitespace run (spaces, tabs, newlines, `&nbsp;`) to one space
/// 3. Trim leading/trailing whitespace
///
/// Applying `normalize` twice yields the same string as applying it once.
///
/// # Examples
/// ```
/// use presscut::tools::clean::normalize;
///
/// let dirty = "  Hello\n\nWorld  &amp; Co  ";
/// assert_eq!(normalize(dirty), "Hello World & Co");
/// ```
pub fn normalize(raw: &str) -> String {
    let decoded = decode_entities_fully(raw);
    normalize_whitespace(&decoded)
}

/// Normalize, mapping an empty result to `None`.
pub fn normalize_non_empty(raw: &str) -> Option<String> {
    let cleaned = normalize(raw);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
