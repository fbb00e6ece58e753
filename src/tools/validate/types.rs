use std::io;
use std::net::{IpAddr, ToSocketAddrs};
use url::Url;

/// A URL that passed scheme, host and address checks.
///
/// Carries the addresses approved during validation so the fetcher can pin
/// its connection to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl {
    url: Url,
    addrs: Vec<IpAddr>,
}

impl ValidatedUrl {
    pub(crate) fn new(url: Url, addrs: Vec<IpAddr>) -> Self {
        Self { url, addrs }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Host as written in the URL (domain or IP literal).
    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    /// Port used for the connection (explicit or the scheme default).
    pub fn port(&self) -> u16 {
        self.url.port_or_known_default().unwrap_or(80)
    }

    /// Addresses the host resolved to, every one of them approved.
    pub fn addrs(&self) -> &[IpAddr] {
        &self.addrs
    }
}

/// Host name resolution used by the validator.
pub trait Resolver {
    fn resolve(&self, host: &str, port: u16) -> io::Result<Vec<IpAddr>>;
}

/// Resolver backed by the operating system (`getaddrinfo`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl Resolver for SystemResolver {
    fn resolve(&self, host: &str, port: u16) -> io::Result<Vec<IpAddr>> {
        Ok((host, port).to_socket_addrs()?.map(|sa| sa.ip()).collect())
    }
}
