use std::net::IpAddr;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PresscutError>;

#[derive(Debug, Clone, Error)]
pub enum PresscutError {
    /* validation-time */
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("only http/https URLs are allowed, got scheme {0:?}")]
    InvalidScheme(String),
    #[error("url missing host")]
    MissingHost,
    #[error("DNS resolution failed for {host}: {reason}")]
    ResolutionFailure { host: String, reason: String },
    #[error("blocked private or local address {addr} for host {host}")]
    BlockedAddress { host: String, addr: IpAddr },

    /* fetch-time */
    #[error("HTTP status {status} from {url}")]
    HttpError { url: String, status: u16 },
    #[error("request to {0} timed out")]
    NetworkTimeout(String),
    #[error("connection to {url} failed: {reason}")]
    ConnectionFailure { url: String, reason: String },
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /* record layer */
    #[error("content is required")]
    MissingContent,
    #[error("storage error: {0}")]
    Storage(String),
}

impl PresscutError {
    /// True for the security-motivated rejections raised before any request is sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl(_)
                | Self::InvalidScheme(_)
                | Self::MissingHost
                | Self::ResolutionFailure { .. }
                | Self::BlockedAddress { .. }
        )
    }

    pub(crate) fn from_transport(url: &str, e: &reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::NetworkTimeout(url.to_string())
        } else {
            Self::ConnectionFailure {
                url: url.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

/* Conversions so `?` works smoothly */
impl From<std::io::Error> for PresscutError {
    fn from(e: std::io::Error) -> Self {
        PresscutError::Storage(e.to_string())
    }
}
impl From<serde_json::Error> for PresscutError {
    fn from(e: serde_json::Error) -> Self {
        PresscutError::Storage(e.to_string())
    }
}
