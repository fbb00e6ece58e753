use crate::error::{PresscutError, Result};
use crate::tools::validate::{vet_url, SystemResolver, ValidatedUrl};
use reqwest::blocking::Client;
use reqwest::redirect;
use std::net::SocketAddr;
use std::time::Duration;

use super::types::FetchOptions;

/// Build a blocking client for one fetch of `target`.
///
/// Every redirect hop goes through the same checks as the initial URL, and
/// the validated host is pinned to the addresses approved for it.
pub(super) fn build_client(target: &ValidatedUrl, opts: &FetchOptions) -> Result<Client> {
    let limit = opts.redirect_limit;
    let policy = redirect::Policy::custom(move |attempt| {
        if attempt.previous().len() > limit {
            return attempt.error(format!("too many redirects (limit {limit})"));
        }
        match vet_url(attempt.url(), &SystemResolver) {
            Ok(_) => attempt.follow(),
            Err(e) => {
                tracing::warn!(target_url = %attempt.url(), error = %e, "redirect rejected");
                attempt.error(e)
            }
        }
    });

    let mut builder = Client::builder()
        .user_agent(opts.user_agent.clone())
        .timeout(Duration::from_millis(opts.timeout_ms))
        .redirect(policy)
        .gzip(true)
        .brotli(true)
        .deflate(true);

    if let Some(domain) = target.url().domain() {
        let pinned: Vec<SocketAddr> = target
            .addrs()
            .iter()
            .map(|ip| SocketAddr::new(*ip, target.port()))
            .collect();
        builder = builder.resolve_to_addrs(domain, &pinned);
    }

    builder
        .build()
        .map_err(|e| PresscutError::Client(e.to_string()))
}

/// Recover a validation error raised from inside the redirect policy.
pub(super) fn redirect_rejection(e: &reqwest::Error) -> Option<PresscutError> {
    let mut source = std::error::Error::source(e);
    while let Some(err) = source {
        if let Some(rejected) = err.downcast_ref::<PresscutError>() {
            return Some(rejected.clone());
        }
        source = err.source();
    }
    None
}
