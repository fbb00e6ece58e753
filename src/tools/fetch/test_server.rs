//! Loopback HTTP server with canned responses, shared by the fetch and api tests.

use crate::tools::validate::ValidatedUrl;
use std::io::{Read, Write};
use std::net::{IpAddr, Ipv4Addr, TcpListener, TcpStream};
use std::thread;
use std::time::Duration;
use url::Url;

/// One canned HTTP/1.1 response served to every connection.
#[derive(Clone)]
pub(crate) struct Canned {
    status_line: &'static str,
    headers: Vec<String>,
    body: Vec<u8>,
    stall: Option<Duration>,
}

impl Canned {
    pub(crate) fn ok(content_type: &str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status_line: "HTTP/1.1 200 OK",
            headers: vec![format!("Content-Type: {content_type}")],
            body: body.into(),
            stall: None,
        }
    }

    pub(crate) fn status(status_line: &'static str) -> Self {
        Self {
            status_line,
            headers: vec!["Content-Type: text/html".into()],
            body: b"<html><body>nope</body></html>".to_vec(),
            stall: None,
        }
    }

    pub(crate) fn redirect(location: &str) -> Self {
        Self {
            status_line: "HTTP/1.1 302 Found",
            headers: vec![format!("Location: {location}")],
            body: Vec::new(),
            stall: None,
        }
    }

    pub(crate) fn stalled(delay: Duration) -> Self {
        Self {
            stall: Some(delay),
            ..Self::ok("text/html", "late")
        }
    }
}

/// Start a loopback server in a background thread and return its base URL.
pub(crate) fn serve(canned: Canned) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let canned = canned.clone();
            thread::spawn(move || respond(stream, &canned));
        }
    });
    format!("http://127.0.0.1:{port}/")
}

fn respond(mut stream: TcpStream, canned: &Canned) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    if stream.read(&mut buf).unwrap_or(0) == 0 {
        return;
    }
    if let Some(delay) = canned.stall {
        thread::sleep(delay);
    }
    let mut head = format!("{}\r\n", canned.status_line);
    for h in &canned.headers {
        head.push_str(h);
        head.push_str("\r\n");
    }
    head.push_str(&format!(
        "Content-Length: {}\r\nConnection: close\r\n\r\n",
        canned.body.len()
    ));
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&canned.body);
}

/// Loopback targets never pass `validate`, so tests build the approved URL directly.
pub(crate) fn loopback_target(base: &str) -> ValidatedUrl {
    ValidatedUrl::new(
        Url::parse(base).unwrap(),
        vec![IpAddr::V4(Ipv4Addr::LOCALHOST)],
    )
}
