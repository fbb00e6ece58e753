//! Extraction entrypoints.
//!
//! [`extract`] is the contract offered to form and record layers: it never
//! fails. [`try_extract`] exposes the underlying failure for callers that want
//! to tell the user why nothing was filled in.

use crate::error::Result;
use crate::tools::domain::domain_of;
use crate::tools::extract::extract_article;
use crate::tools::fetch::{fetch, FetchOptions};
use crate::tools::validate::{validate, ValidatedUrl};
use crate::types::ExtractionOutcome;
use std::time::Instant;

/// Extract title, body and domain from `url` with default fetch options.
///
/// Never fails: validation and fetch problems come back as an outcome with
/// absent title and body and a best-effort domain.
///
/// # Examples
/// ```
/// use presscut::extract;
///
/// let outcome = extract("http://127.0.0.1/internal");
/// assert_eq!(outcome.domain, "127.0.0.1");
/// assert!(outcome.title.is_none());
/// assert!(outcome.body_text.is_none());
/// ```
pub fn extract(url: &str) -> ExtractionOutcome {
    extract_with(url, &FetchOptions::default())
}

/// Like [`extract`] with explicit fetch options.
pub fn extract_with(url: &str, opts: &FetchOptions) -> ExtractionOutcome {
    try_extract(url, opts).unwrap_or_else(|_| ExtractionOutcome::empty(domain_of(url)))
}

/// Validate, fetch and extract, surfacing the first failure.
///
/// A page that fetched fine but had no usable text is still `Ok`, with
/// absent fields.
pub fn try_extract(url: &str, opts: &FetchOptions) -> Result<ExtractionOutcome> {
    let start_time = Instant::now();
    let domain = domain_of(url);

    let result = validate(url).and_then(|target| extract_target(&target, &domain, opts));

    let elapsed_ms = start_time.elapsed().as_millis() as u64;
    match &result {
        Ok(outcome) => tracing::info!(
            domain = %domain,
            has_title = outcome.title.is_some(),
            has_body = outcome.body_text.is_some(),
            "extract succeeded in {}ms",
            elapsed_ms
        ),
        Err(e) => tracing::warn!(
            domain = %domain,
            error = %e,
            "extract failed in {}ms",
            elapsed_ms
        ),
    }

    result
}

/// Fetch an already validated target and pull the article out of it.
pub(crate) fn extract_target(
    target: &ValidatedUrl,
    domain: &str,
    opts: &FetchOptions,
) -> Result<ExtractionOutcome> {
    let fetched = fetch(target, opts)?;
    let article = extract_article(&fetched.text());
    Ok(ExtractionOutcome {
        title: article.title,
        body_text: article.body_text,
        domain: domain.to_string(),
    })
}
