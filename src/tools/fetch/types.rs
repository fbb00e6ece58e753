use encoding_rs::{Encoding, UTF_8};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_MAX_BYTES: usize = 1_000_000;
pub const DEFAULT_REDIRECT_LIMIT: usize = 10;
pub const DEFAULT_USER_AGENT: &str = concat!(
    "presscut/",
    env!("CARGO_PKG_VERSION"),
    " (article preview bot; +https://github.com/presscut/presscut)"
);

/// Knobs for a single bounded fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchOptions {
    /// Whole-request timeout (connect, headers and body).
    pub timeout_ms: u64,
    /// Bytes kept from the response body; anything past this is dropped.
    pub max_bytes: usize,
    pub user_agent: String,
    pub redirect_limit: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_bytes: DEFAULT_MAX_BYTES,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            redirect_limit: DEFAULT_REDIRECT_LIMIT,
        }
    }
}

impl FetchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_redirect_limit(mut self, redirect_limit: usize) -> Self {
        self.redirect_limit = redirect_limit;
        self
    }
}

/// Body of a successful fetch.
///
/// Transient: produced and consumed within one extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// Raw body bytes, at most `max_bytes` long
    pub content: Vec<u8>,
    /// Charset label declared in `Content-Type`, if any
    pub charset: Option<String>,
    /// True when the body was cut at the byte cap
    pub truncated: bool,
    pub status: u16,
    /// URL after redirects
    pub final_url: String,
}

impl FetchResult {
    /// Encoding used for decoding: the declared charset, else UTF-8.
    pub fn encoding(&self) -> &'static Encoding {
        self.charset
            .as_deref()
            .and_then(|label| Encoding::for_label(label.trim().as_bytes()))
            .unwrap_or(UTF_8)
    }

    /// Decode the body, replacing malformed sequences with U+FFFD.
    pub fn text(&self) -> String {
        let (text, _, _) = self.encoding().decode(&self.content);
        text.into_owned()
    }
}
