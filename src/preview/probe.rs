// src/preview/probe.rs
//
// Load check for the preview panel. HTTP/1.0 GET over TCP (std-only, no TLS):
// plain http targets are fetched and judged by status line; anything else
// only gets a reachability check and comes back Unconfirmed.

use std::{
    io::{ErrorKind, Read, Write},
    net::TcpStream,
    sync::mpsc::Sender,
    thread::{self, JoinHandle},
    time::Duration,
};

use url::Url;

use super::{PreviewOutcome, ProbeEvent, ProbeTicket};
use crate::config::consts::{PROBE_MAX_BODY, PROBE_USER_AGENT};
use crate::core::html::title_of;
use crate::error::ProbeError;

pub fn probe(url: &Url, io_timeout: Duration) -> PreviewOutcome {
    let res = match url.scheme() {
        "http" => http_get(url, io_timeout).map(|body| PreviewOutcome::Loaded { title: title_of(&body) }),
        _ => connect(url, io_timeout).map(|_| PreviewOutcome::Unconfirmed),
    };
    res.unwrap_or_else(|e| PreviewOutcome::Failed(e.to_string()))
}

/// Run `probe` on a worker thread; the result is sent tagged with the ticket's generation.
pub fn spawn_probe(ticket: ProbeTicket, io_timeout: Duration, tx: Sender<ProbeEvent>) -> JoinHandle<()> {
    thread::spawn(move || {
        let outcome = match Url::parse(&ticket.url) {
            Ok(url) => probe(&url, io_timeout),
            Err(e) => PreviewOutcome::Failed(e.to_string()),
        };
        // Receiver gone means the app is closing.
        let _ = tx.send(ProbeEvent { generation: ticket.generation, outcome });
    })
}

fn connect(url: &Url, timeout: Duration) -> Result<TcpStream, ProbeError> {
    let host = url.host_str().ok_or(ProbeError::NoHost)?;
    if url.port_or_known_default().is_none() {
        return Err(ProbeError::NoPort(s!(url.scheme())));
    }
    let addrs = url.socket_addrs(|| None)?;

    let mut last_err = None;
    for addr in addrs {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(s) => return Ok(s),
            Err(e) => last_err = Some(e),
        }
    }
    Err(match last_err {
        Some(e) => ProbeError::Io(e),
        None => ProbeError::Resolve(s!(host)),
    })
}

fn request_target(url: &Url) -> String {
    match url.query() {
        Some(q) => format!("{}?{}", url.path(), q),
        None => s!(url.path()),
    }
}

fn host_header(url: &Url) -> String {
    let host = url.host_str().unwrap_or("");
    match url.port() {
        Some(p) => format!("{host}:{p}"),
        None => s!(host),
    }
}

/// GET and return the body (capped). Non-2xx/3xx statuses are errors.
pub fn http_get(url: &Url, timeout: Duration) -> Result<String, ProbeError> {
    let mut s = connect(url, timeout)?;
    s.set_read_timeout(Some(timeout))?;
    s.set_write_timeout(Some(timeout))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nConnection: close\r\n\r\n",
        request_target(url),
        host_header(url),
        PROBE_USER_AGENT
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let buf = read_response(&mut s)?;
    let resp = String::from_utf8_lossy(&buf);

    let (status, body) = split_response(&resp)?;
    if !(200..400).contains(&status) {
        let line = resp.split("\r\n").next().unwrap_or("");
        return Err(ProbeError::Status(s!(line)));
    }
    Ok(s!(body))
}

/// Read until EOF, the size cap, or the end of a `Content-Length` body.
/// A read timeout after the status line arrived ends the response: servers
/// that keep the connection open still count as having answered.
fn read_response<R: Read>(r: &mut R) -> Result<Vec<u8>, ProbeError> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    while buf.len() < PROBE_MAX_BODY {
        match r.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if body_complete(&buf) {
                    break;
                }
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut)
                && has_status_line(&buf) =>
            {
                logd!("Preview: read timed out after {} bytes, using what arrived", buf.len());
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }
    buf.truncate(PROBE_MAX_BODY);
    Ok(buf)
}

fn has_status_line(buf: &[u8]) -> bool {
    let head = String::from_utf8_lossy(buf);
    match head.find("\r\n") {
        Some(i) => parse_status(&head[..i]).is_some(),
        None => false,
    }
}

/// True once headers are in and a declared `Content-Length` body is complete.
fn body_complete(buf: &[u8]) -> bool {
    let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else { return false };
    match content_length(&String::from_utf8_lossy(&buf[..end])) {
        Some(len) => buf.len() >= end + 4 + len,
        None => false,
    }
}

/// `Content-Length` from a raw header block, if present and numeric.
pub fn content_length(headers: &str) -> Option<usize> {
    headers.split("\r\n").skip(1).find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if name.trim().eq_ignore_ascii_case("content-length") {
            value.trim().parse().ok()
        } else {
            None
        }
    })
}

/// `HTTP/1.1 200 OK` → 200
pub fn parse_status(line: &str) -> Option<u16> {
    let mut parts = line.split_whitespace();
    let proto = parts.next()?;
    if !proto.starts_with("HTTP/") {
        return None;
    }
    parts.next()?.parse().ok()
}

/// Status code and body of a raw response.
pub fn split_response(resp: &str) -> Result<(u16, &str), ProbeError> {
    let status_line = resp.split("\r\n").next().unwrap_or("");
    let status = parse_status(status_line).ok_or(ProbeError::Malformed)?;
    let body = match resp.find("\r\n\r\n") {
        Some(i) => &resp[i + 4..],
        None => "",
    };
    Ok((status, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_parsing() {
        assert_eq!(parse_status("HTTP/1.1 200 OK"), Some(200));
        assert_eq!(parse_status("HTTP/1.0 404 Not Found"), Some(404));
        assert_eq!(parse_status("SSH-2.0-OpenSSH"), None);
        assert_eq!(parse_status(""), None);
    }

    #[test]
    fn response_split() {
        let (code, body) = split_response("HTTP/1.0 301 Moved\r\nLocation: /\r\n\r\n<p>x</p>").unwrap();
        assert_eq!(code, 301);
        assert_eq!(body, "<p>x</p>");
        assert!(matches!(split_response("garbage"), Err(ProbeError::Malformed)));
    }

    #[test]
    fn content_length_header_is_case_insensitive() {
        assert_eq!(content_length("HTTP/1.1 200 OK\r\ncontent-LENGTH: 12\r\nX: y"), Some(12));
        assert_eq!(content_length("HTTP/1.1 200 OK\r\nX: y"), None);
    }

    #[test]
    fn body_is_complete_at_declared_length() {
        assert!(body_complete(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nok"));
        assert!(!body_complete(b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nok"));
        assert!(!body_complete(b"HTTP/1.1 200 OK\r\n\r\nok"));
    }

    #[test]
    fn request_line_keeps_query() {
        let url = Url::parse("http://example.com:8080/a/b?x=1").unwrap();
        assert_eq!(request_target(&url), "/a/b?x=1");
        assert_eq!(host_header(&url), "example.com:8080");

        let url = Url::parse("http://example.com").unwrap();
        assert_eq!(request_target(&url), "/");
        assert_eq!(host_header(&url), "example.com");
    }

    #[test]
    fn hostless_url_fails() {
        let url = Url::parse("mailto:someone@example.com").unwrap();
        assert!(matches!(probe(&url, Duration::from_millis(200)), PreviewOutcome::Failed(_)));
    }
}
