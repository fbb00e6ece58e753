use std::io::{self, Read};

pub(super) const CHUNK_SIZE: usize = 8 * 1024;

/// Read `reader` chunk by chunk, keeping at most `cap` bytes.
///
/// Returns the bytes and whether anything past the cap was seen. Reading
/// stops at the first chunk that crosses the cap.
pub(super) fn read_capped<R: Read>(reader: &mut R, cap: usize) -> io::Result<(Vec<u8>, bool)> {
    let mut content = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => return Ok((content, false)),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        content.extend_from_slice(&chunk[..n]);
        if content.len() > cap {
            content.truncate(cap);
            return Ok((content, true));
        }
    }
}

/// Pull the `charset` parameter out of a `Content-Type` header value.
pub(super) fn charset_from_content_type(value: &str) -> Option<String> {
    value
        .split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("charset"))
        .map(|(_, v)| v.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
        .filter(|v| !v.is_empty())
}

/// True if an I/O error raised mid-body is really the request timeout firing.
pub(super) fn is_timeout_io(e: &io::Error) -> bool {
    if e.kind() == io::ErrorKind::TimedOut {
        return true;
    }
    e.get_ref()
        .and_then(|inner| inner.downcast_ref::<reqwest::Error>())
        .map(|re| re.is_timeout())
        .unwrap_or(false)
}
