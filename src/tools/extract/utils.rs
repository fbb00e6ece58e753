use scraper::{ElementRef, Html, Selector};

use super::types::Strategy;
use crate::selectors::{
    ARTICLE_BODY_SELECTOR, ARTICLE_SELECTOR, BLOCK_SELECTOR, H1_SELECTOR, MAIN_SELECTOR,
    OG_TITLE_SELECTOR, PARAGRAPH_SELECTOR, ROLE_MAIN_SELECTOR, TITLE_SELECTOR,
};
use crate::tools::clean::normalize_non_empty;

/// Title sources, most reliable first.
pub(super) const TITLE_STRATEGIES: [Strategy; 3] = [title_tag, og_title_meta, first_h1];

/// Body sources: semantic containers in priority order, then every `<p>`.
pub(super) const BODY_STRATEGIES: [Strategy; 5] = [
    article_container,
    article_body_container,
    role_main_container,
    main_container,
    all_paragraphs,
];

/// Run strategies in order; the first `Some` wins.
pub(super) fn first_non_empty(doc: &Html, strategies: &[Strategy]) -> Option<String> {
    strategies.iter().find_map(|strategy| strategy(doc))
}

/// Text nodes of `el`, each trimmed, empties dropped, space-joined.
fn element_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn joined_text<'a>(elements: impl Iterator<Item = ElementRef<'a>>) -> String {
    elements.map(element_text).collect::<Vec<_>>().join(" ")
}

fn first_element_text(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector)
        .next()
        .and_then(|el| normalize_non_empty(&element_text(el)))
}

fn title_tag(doc: &Html) -> Option<String> {
    first_element_text(doc, &TITLE_SELECTOR)
}

fn og_title_meta(doc: &Html) -> Option<String> {
    doc.select(&OG_TITLE_SELECTOR)
        .next()
        .and_then(|el| el.value().attr("content"))
        .and_then(normalize_non_empty)
}

fn first_h1(doc: &Html) -> Option<String> {
    first_element_text(doc, &H1_SELECTOR)
}

/// Paragraphs, `h2`s and list items of the first element matching `container`.
///
/// Only the first match is considered; later matches of the same selector
/// are not tried.
fn container_blocks(doc: &Html, container: &Selector) -> Option<String> {
    let root = doc.select(container).next()?;
    normalize_non_empty(&joined_text(root.select(&BLOCK_SELECTOR)))
}

fn article_container(doc: &Html) -> Option<String> {
    container_blocks(doc, &ARTICLE_SELECTOR)
}

fn article_body_container(doc: &Html) -> Option<String> {
    container_blocks(doc, &ARTICLE_BODY_SELECTOR)
}

fn role_main_container(doc: &Html) -> Option<String> {
    container_blocks(doc, &ROLE_MAIN_SELECTOR)
}

fn main_container(doc: &Html) -> Option<String> {
    container_blocks(doc, &MAIN_SELECTOR)
}

// May return navigation or footer text on pages without a container.
fn all_paragraphs(doc: &Html) -> Option<String> {
    normalize_non_empty(&joined_text(doc.select(&PARAGRAPH_SELECTOR)))
}
