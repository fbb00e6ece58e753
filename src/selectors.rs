//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// Selector for `<title>` tags.
pub static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("valid title selector"));

/// Selector for the Open Graph title meta tag.
pub static OG_TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"meta[property="og:title"]"#).expect("valid og:title selector")
});

/// Selector for `<h1>` headings.
pub static H1_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1").expect("valid h1 selector"));

/// Selector for `<article>` containers.
pub static ARTICLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("article").expect("valid article selector"));

/// Selector for schema.org `articleBody` divs.
pub static ARTICLE_BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"div[itemprop="articleBody"]"#).expect("valid articleBody selector")
});

/// Selector for ARIA `role="main"` divs.
pub static ROLE_MAIN_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"div[role="main"]"#).expect("valid role=main selector"));

/// Selector for `<main>` containers.
pub static MAIN_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("main").expect("valid main selector"));

/// Selector for the text blocks collected inside a container.
pub static BLOCK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p, h2, li").expect("valid block selector"));

/// Selector for `<p>` elements.
pub static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("valid paragraph selector"));
