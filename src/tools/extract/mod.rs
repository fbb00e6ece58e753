//! Heuristic title and body extraction from page markup.

pub mod types;
mod utils;


pub use types::*;
use utils::*;

use scraper::Html;

/// Extract the page title.
///
/// Tries `<title>`, then the `og:title` meta tag, then the first `<h1>`,
/// returning the first that is non-empty after normalization.
///
/// # Examples
/// ```
/// use presscut::tools::extract::extract_title;
///
/// let html = r#"<html><head><meta property="og:title" content="OG &amp; Co"></head></html>"#;
/// assert_eq!(extract_title(html).as_deref(), Some("OG & Co"));
/// ```
pub fn extract_title(html: &str) -> Option<String> {
    title_from_document(&Html::parse_document(html))
}

/// Extract the main body text.
///
/// Looks at `<article>`, `div[itemprop="articleBody"]`, `div[role="main"]`
/// and `<main>` in that order. The first container whose paragraphs,
/// `h2`s and list items yield text wins. Otherwise every `<p>` in the
/// document is used.
///
/// # Examples
/// ```
/// use presscut::tools::extract::extract_body;
///
/// let html = "<html><body><article><p>A</p><p>B</p></article></body></html>";
/// assert_eq!(extract_body(html).as_deref(), Some("A B"));
/// ```
pub fn extract_body(html: &str) -> Option<String> {
    body_from_document(&Html::parse_document(html))
}

/// Extract title and body from a single parse.
pub fn extract_article(html: &str) -> ExtractedArticle {
    let doc = Html::parse_document(html);
    ExtractedArticle {
        title: title_from_document(&doc),
        body_text: body_from_document(&doc),
    }
}

/// Title of an already parsed document.
pub fn title_from_document(doc: &Html) -> Option<String> {
    first_non_empty(doc, &TITLE_STRATEGIES)
}

/// Body text of an already parsed document.
pub fn body_from_document(doc: &Html) -> Option<String> {
    first_non_empty(doc, &BODY_STRATEGIES)
}
