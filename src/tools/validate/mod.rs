//! SSRF guard: scheme, host and resolved-address checks.

pub mod types;
mod utils;


pub use types::*;

use crate::error::{PresscutError, Result};
use std::net::IpAddr;
use url::{Host, Url};

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// Validate `url` using the operating system resolver.
///
/// Fails with [`PresscutError::InvalidScheme`] unless the scheme is `http`
/// or `https`, [`PresscutError::MissingHost`] without a host,
/// [`PresscutError::ResolutionFailure`] when DNS yields nothing, and
/// [`PresscutError::BlockedAddress`] if any resolved address is private,
/// loopback, link-local or otherwise reserved.
///
/// # Examples
/// ```
/// use presscut::tools::validate::validate;
/// use presscut::PresscutError;
///
/// let err = validate("ftp://example.com/file").unwrap_err();
/// assert!(matches!(err, PresscutError::InvalidScheme(_)));
///
/// let err = validate("http://127.0.0.1/admin").unwrap_err();
/// assert!(matches!(err, PresscutError::BlockedAddress { .. }));
/// ```
pub fn validate(url: &str) -> Result<ValidatedUrl> {
    validate_with(url, &SystemResolver)
}

/// Validate `url`, resolving host names with `resolver`.
pub fn validate_with<R: Resolver + ?Sized>(url: &str, resolver: &R) -> Result<ValidatedUrl> {
    let parsed = Url::parse(url.trim()).map_err(|e| match e {
        url::ParseError::EmptyHost => PresscutError::MissingHost,
        _ => PresscutError::InvalidUrl(url.to_string()),
    })?;
    let addrs = vet_url(&parsed, resolver)?;
    Ok(ValidatedUrl::new(parsed, addrs))
}

/// Classify a literal address; `true` means it must not be contacted.
///
/// # Examples
/// ```
/// use presscut::tools::validate::is_blocked;
///
/// assert!(is_blocked("10.1.2.3".parse().unwrap()));
/// assert!(is_blocked("::1".parse().unwrap()));
/// assert!(!is_blocked("93.184.216.34".parse().unwrap()));
/// ```
pub fn is_blocked(ip: IpAddr) -> bool {
    utils::is_blocked_ip(ip)
}

/// Run every check on an already parsed URL and return the approved addresses.
///
/// Shared by initial validation and redirect hops.
pub(crate) fn vet_url<R: Resolver + ?Sized>(url: &Url, resolver: &R) -> Result<Vec<IpAddr>> {
    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(PresscutError::InvalidScheme(url.scheme().to_string()));
    }

    let host = url.host().ok_or(PresscutError::MissingHost)?;
    let host_str = url.host_str().unwrap_or_default().to_string();
    let port = url.port_or_known_default().unwrap_or(80);

    let addrs = match host {
        Host::Ipv4(ip) => vec![IpAddr::V4(ip)],
        Host::Ipv6(ip) => vec![IpAddr::V6(ip)],
        Host::Domain(domain) => {
            if domain.is_empty() {
                return Err(PresscutError::MissingHost);
            }
            resolver
                .resolve(domain, port)
                .map_err(|e| PresscutError::ResolutionFailure {
                    host: host_str.clone(),
                    reason: e.to_string(),
                })?
        }
    };

    if addrs.is_empty() {
        return Err(PresscutError::ResolutionFailure {
            host: host_str,
            reason: "no addresses returned".into(),
        });
    }

    if let Some(addr) = addrs.iter().copied().find(|ip| is_blocked(*ip)) {
        tracing::warn!(host = %host_str, %addr, "rejected url resolving to blocked address");
        return Err(PresscutError::BlockedAddress {
            host: host_str,
            addr,
        });
    }

    Ok(addrs)
}
