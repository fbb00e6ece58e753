//! Syntactic domain lookup for display.

use url::Url;

/// Return the `host[:port]` authority of `url`, or `""` if it cannot be parsed.
///
/// Never validates and never touches the network, so it also works for URLs
/// the validator would reject. The host comes back as the URL parser
/// normalizes it (lowercase, punycode) and default ports are omitted.
///
/// # Examples
/// ```
/// use presscut::tools::domain::domain_of;
///
/// assert_eq!(domain_of("https://news.example.com/a/b?x=1"), "news.example.com");
/// assert_eq!(domain_of("not a url"), "");
/// ```
pub fn domain_of(url: &str) -> String {
    let Ok(parsed) = Url::parse(url.trim()) else {
        return String::new();
    };
    let Some(host) = parsed.host_str() else {
        return String::new();
    };
    match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}
