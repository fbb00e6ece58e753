mod client;
mod utils;

mod tests;

#[cfg(test)]
pub(crate) mod test_server;

pub mod types;

pub use types::*;

use crate::error::{PresscutError, Result};
use crate::tools::validate::{validate, ValidatedUrl};
use client::{build_client, redirect_rejection};
use reqwest::header::CONTENT_TYPE;
use utils::{charset_from_content_type, is_timeout_io, read_capped};

/// Fetch a validated URL with a timeout and a hard cap on body bytes.
///
/// One attempt, no retries. Redirects are followed and re-validated.
/// Non-success statuses fail with [`PresscutError::HttpError`]; a body longer
/// than `opts.max_bytes` is cut, not rejected ([`FetchResult::truncated`]).
///
/// # Examples
/// ```no_run
/// use presscut::tools::fetch::{fetch, FetchOptions};
/// use presscut::tools::validate::validate;
///
/// # fn example() -> presscut::Result<()> {
/// let target = validate("https://example.com/story")?;
/// let result = fetch(&target, &FetchOptions::default())?;
/// println!("{} bytes, truncated: {}", result.content.len(), result.truncated);
/// let html = result.text();
/// # Ok(())
/// # }
/// ```
pub fn fetch(target: &ValidatedUrl, opts: &FetchOptions) -> Result<FetchResult> {
    let url = target.as_str();
    let client = build_client(target, opts)?;

    let mut response = client.get(url).send().map_err(|e| {
        redirect_rejection(&e).unwrap_or_else(|| PresscutError::from_transport(url, &e))
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(PresscutError::HttpError {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let charset = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(charset_from_content_type);
    let final_url = response.url().to_string();

    let (content, truncated) = read_capped(&mut response, opts.max_bytes).map_err(|e| {
        if is_timeout_io(&e) {
            PresscutError::NetworkTimeout(url.to_string())
        } else {
            PresscutError::ConnectionFailure {
                url: url.to_string(),
                reason: e.to_string(),
            }
        }
    })?;

    if truncated {
        tracing::info!(url, max_bytes = opts.max_bytes, "response body truncated at cap");
    }

    Ok(FetchResult {
        content,
        charset,
        truncated,
        status: status.as_u16(),
        final_url,
    })
}

/// Validate then fetch a raw URL string.
pub fn fetch_url(url: &str, opts: &FetchOptions) -> Result<FetchResult> {
    let target = validate(url)?;
    fetch(&target, opts)
}
