#![cfg(test)]
mod tests {
    use crate::error::PresscutError;
    use crate::tools::fetch::test_server::{loopback_target, serve, Canned};
    use crate::tools::fetch::utils::{charset_from_content_type, read_capped, CHUNK_SIZE};
    use crate::tools::fetch::*;
    use std::io::Cursor;
    use std::net::{IpAddr, Ipv4Addr, TcpListener};
    use std::time::Duration;

    #[test]
    fn test_fetch_small_page() {
        let base = serve(Canned::ok(
            "text/html; charset=utf-8",
            "<html><title>Hi</title></html>",
        ));
        let result = fetch(&loopback_target(&base), &FetchOptions::default()).unwrap();
        assert_eq!(result.status, 200);
        assert!(!result.truncated);
        assert_eq!(result.charset.as_deref(), Some("utf-8"));
        assert_eq!(result.text(), "<html><title>Hi</title></html>");
        assert_eq!(result.final_url, base);
    }

    #[test]
    fn test_fetch_non_success_status_is_http_error() {
        let base = serve(Canned::status("HTTP/1.1 404 Not Found"));
        match fetch(&loopback_target(&base), &FetchOptions::default()) {
            Err(PresscutError::HttpError { status, .. }) => assert_eq!(status, 404),
            other => panic!("expected HttpError, got {other:?}"),
        }

        let base = serve(Canned::status("HTTP/1.1 503 Service Unavailable"));
        assert!(matches!(
            fetch(&loopback_target(&base), &FetchOptions::default()),
            Err(PresscutError::HttpError { status: 503, .. })
        ));
    }

    #[test]
    fn test_fetch_oversized_body_is_truncated_not_error() {
        let body = vec![b'a'; 2_500_000];
        let base = serve(Canned::ok("text/html", body));
        let opts = FetchOptions::default();
        let result = fetch(&loopback_target(&base), &opts).unwrap();
        assert!(result.truncated);
        assert!(result.content.len() <= opts.max_bytes + CHUNK_SIZE);
        assert_eq!(result.content.len(), DEFAULT_MAX_BYTES);
    }

    #[test]
    fn test_fetch_respects_custom_cap() {
        let base = serve(Canned::ok("text/plain", "x".repeat(50_000)));
        let opts = FetchOptions::new().with_max_bytes(100);
        let result = fetch(&loopback_target(&base), &opts).unwrap();
        assert!(result.truncated);
        assert_eq!(result.content.len(), 100);
    }

    #[test]
    fn test_fetch_decodes_declared_charset() {
        let base = serve(Canned::ok(
            "text/html; charset=ISO-8859-1",
            b"<p>caf\xe9</p>".to_vec(),
        ));
        let result = fetch(&loopback_target(&base), &FetchOptions::default()).unwrap();
        assert_eq!(result.text(), "<p>café</p>");
    }

    #[test]
    fn test_fetch_timeout() {
        let base = serve(Canned::stalled(Duration::from_secs(3)));
        let opts = FetchOptions::new().with_timeout_ms(300);
        assert!(matches!(
            fetch(&loopback_target(&base), &opts),
            Err(PresscutError::NetworkTimeout(_))
        ));
    }

    #[test]
    fn test_fetch_connection_refused() {
        // Bind then drop to get a port nobody listens on.
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let target = loopback_target(&format!("http://127.0.0.1:{port}/"));
        assert!(matches!(
            fetch(&target, &FetchOptions::default()),
            Err(PresscutError::ConnectionFailure { .. })
        ));
    }

    #[test]
    fn test_redirect_to_internal_address_is_blocked() {
        let internal = serve(Canned::ok("text/html", "secret"));
        let base = serve(Canned::redirect(&format!("{internal}admin")));
        match fetch(&loopback_target(&base), &FetchOptions::default()) {
            Err(PresscutError::BlockedAddress { addr, .. }) => {
                assert_eq!(addr, IpAddr::V4(Ipv4Addr::LOCALHOST))
            }
            other => panic!("expected BlockedAddress, got {other:?}"),
        }
    }

    #[test]
    fn test_redirect_to_disallowed_scheme_is_rejected() {
        let base = serve(Canned::redirect("ftp://files.example.com/dump"));
        assert!(matches!(
            fetch(&loopback_target(&base), &FetchOptions::default()),
            Err(PresscutError::InvalidScheme(_))
        ));
    }

    #[test]
    fn test_redirect_limit_is_enforced() {
        // Loopback hops are blocked by validation, so a zero limit is what reaches the cap.
        let base = serve(Canned::redirect("/again"));
        let opts = FetchOptions::new().with_redirect_limit(0);
        match fetch(&loopback_target(&base), &opts) {
            Err(PresscutError::ConnectionFailure { url, .. }) => assert_eq!(url, base),
            other => panic!("expected ConnectionFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_fetch_url_rejects_before_network() {
        assert!(matches!(
            fetch_url("http://127.0.0.1:1/", &FetchOptions::default()),
            Err(PresscutError::BlockedAddress { .. })
        ));
        assert!(matches!(
            fetch_url("file:///etc/passwd", &FetchOptions::default()),
            Err(PresscutError::InvalidScheme(_))
        ));
    }

    #[test]
    fn test_read_capped_boundaries() {
        let (bytes, truncated) = read_capped(&mut Cursor::new(Vec::<u8>::new()), 10).unwrap();
        assert!(bytes.is_empty());
        assert!(!truncated);

        let (bytes, truncated) = read_capped(&mut Cursor::new(vec![1u8; 10]), 10).unwrap();
        assert_eq!(bytes.len(), 10);
        assert!(!truncated);

        let (bytes, truncated) = read_capped(&mut Cursor::new(vec![1u8; 11]), 10).unwrap();
        assert_eq!(bytes.len(), 10);
        assert!(truncated);
    }

    #[test]
    fn test_read_capped_stops_reading_after_cap() {
        let source = vec![7u8; CHUNK_SIZE * 10];
        let mut cursor = Cursor::new(source);
        let (bytes, truncated) = read_capped(&mut cursor, CHUNK_SIZE + 1).unwrap();
        assert!(truncated);
        assert_eq!(bytes.len(), CHUNK_SIZE + 1);
        assert!(cursor.position() as usize <= 2 * CHUNK_SIZE);
    }

    #[test]
    fn test_charset_from_content_type() {
        assert_eq!(
            charset_from_content_type("text/html; charset=UTF-8").as_deref(),
            Some("UTF-8")
        );
        assert_eq!(
            charset_from_content_type("text/html;Charset=\"windows-1251\"").as_deref(),
            Some("windows-1251")
        );
        assert_eq!(charset_from_content_type("text/html"), None);
        assert_eq!(charset_from_content_type("text/html; charset="), None);
    }

    #[test]
    fn test_text_is_lossy_and_defaults_to_utf8() {
        let result = FetchResult {
            content: b"ok \xff\xfe bytes".to_vec(),
            charset: None,
            truncated: false,
            status: 200,
            final_url: "http://example.com/".into(),
        };
        assert_eq!(result.encoding(), encoding_rs::UTF_8);
        assert!(result.text().contains('\u{FFFD}'));
        assert!(result.text().starts_with("ok "));

        let unknown = FetchResult {
            charset: Some("no-such-charset".into()),
            ..result
        };
        assert_eq!(unknown.encoding(), encoding_rs::UTF_8);
    }
}
