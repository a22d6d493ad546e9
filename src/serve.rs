//! Static asset shim.
//!
//! Every request is answered from the assets directory. Paths without a
//! matching file get the root `index.html` so client-side routing can take
//! over.
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead, BufReader, ErrorKind, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::time::Duration;

const INDEX_FILE: &str = "index.html";
const MAX_HEADER_BYTES: usize = 8192;
const MAX_PATH_LEN: usize = 256;

#[derive(Clone, Debug)]
pub struct ServeOptions {
    pub root: PathBuf,
    pub bind: String,
    pub port: u16,
}

/// How a request path maps onto the assets directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// A file that exists under the root.
    Asset(PathBuf),
    /// No match; the entry document is served instead.
    Fallback(PathBuf),
    NotFound,
}

pub fn serve(options: &ServeOptions) -> Result<()> {
    let root = options
        .root
        .canonicalize()
        .with_context(|| format!("resolve assets dir {}", options.root.display()))?;
    let listener = TcpListener::bind((options.bind.as_str(), options.port))
        .with_context(|| format!("bind {}:{}", options.bind, options.port))?;
    let addr = listener.local_addr().context("read listener address")?;
    tracing::info!(%addr, root = %root.display(), "serving assets");
    if !root.join(INDEX_FILE).is_file() {
        tracing::warn!("no {INDEX_FILE} in assets dir; unknown paths will 404");
    }
    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                if let Err(err) = handle_connection(stream, &root) {
                    tracing::debug!(error = %err, "connection failed");
                }
            }
            Err(err) => tracing::debug!(error = %err, "accept failed"),
        }
    }
    Ok(())
}

fn handle_connection(mut stream: TcpStream, root: &Path) -> io::Result<()> {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let Some(request) = read_request(&mut stream)? else {
        return Ok(());
    };

    let head_only = request.method == "HEAD";
    if request.method != "GET" && !head_only {
        return write_response(
            &mut stream,
            "405 Method Not Allowed",
            "text/plain; charset=utf-8",
            b"Method not allowed.",
            false,
        );
    }

    let path = normalize_path(&request.path);
    let resolved = resolve(root, &path);
    tracing::debug!(method = %request.method, %path, ?resolved, "request");
    match resolved {
        Resolved::Asset(file) | Resolved::Fallback(file) => match fs::read(&file) {
            Ok(body) => write_response(
                &mut stream,
                "200 OK",
                content_type(&file),
                &body,
                head_only,
            ),
            Err(_) => write_response(
                &mut stream,
                "500 Internal Server Error",
                "text/plain; charset=utf-8",
                b"Failed to read asset.",
                head_only,
            ),
        },
        Resolved::NotFound => write_response(
            &mut stream,
            "404 Not Found",
            "text/plain; charset=utf-8",
            b"Not found.",
            head_only,
        ),
    }
}

struct HttpRequest {
    method: String,
    path: String,
}

/// Read the request line and drain the headers that follow it.
fn read_request(stream: &mut TcpStream) -> io::Result<Option<HttpRequest>> {
    let mut reader = BufReader::new(stream).take(MAX_HEADER_BYTES as u64);
    let mut request_line = String::new();
    if reader.read_line(&mut request_line)? == 0 {
        return Ok(None);
    }
    // Unread input makes the close reset the connection before the client reads.
    let mut header = String::new();
    loop {
        header.clear();
        match reader.read_line(&mut header) {
            Ok(0) => break,
            Ok(_) if header.trim_end().is_empty() => break,
            Ok(_) => {}
            Err(err) if matches!(err.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                break
            }
            Err(err) => return Err(err),
        }
    }

    let mut parts = request_line.split_whitespace();
    let Some(method) = parts.next() else {
        return Ok(None);
    };
    let path = parts.next().unwrap_or("/");
    Ok(Some(HttpRequest {
        method: method.to_string(),
        path: path.to_string(),
    }))
}

/// Decode `%XX` escapes and refuse anything that could escape the root.
/// Rejected paths become `/`.
pub fn normalize_path(raw: &str) -> String {
    let raw = raw.split(['?', '#']).next().unwrap_or_default().trim();
    if !raw.starts_with('/') || raw.len() > MAX_PATH_LEN {
        return "/".to_string();
    }
    match percent_decode(raw) {
        Some(path) if !path.contains("..") && !path.contains(['\\', '\0']) => path,
        _ => "/".to_string(),
    }
}

fn percent_decode(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] == b'%' {
            let hex = raw.get(index + 1..index + 3)?;
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            decoded.push(u8::from_str_radix(hex, 16).ok()?);
            index += 3;
        } else {
            decoded.push(bytes[index]);
            index += 1;
        }
    }
    String::from_utf8(decoded).ok()
}

/// Map a normalized request path onto `root`.
pub fn resolve(root: &Path, path: &str) -> Resolved {
    let relative = path.trim_start_matches('/');
    let candidate = root.join(relative);
    if candidate.is_file() {
        return Resolved::Asset(candidate);
    }
    let dir_index = candidate.join(INDEX_FILE);
    if candidate.is_dir() && dir_index.is_file() {
        return Resolved::Asset(dir_index);
    }
    let index = root.join(INDEX_FILE);
    if index.is_file() {
        return Resolved::Fallback(index);
    }
    Resolved::NotFound
}

pub fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") | Some("mjs") => "text/javascript; charset=utf-8",
        Some("json") | Some("map") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain; charset=utf-8",
        Some("wasm") => "application/wasm",
        _ => "application/octet-stream",
    }
}

fn write_response(
    stream: &mut TcpStream,
    status: &str,
    content_type: &str,
    body: &[u8],
    head_only: bool,
) -> io::Result<()> {
    let head = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nX-Content-Type-Options: nosniff\r\nConnection: close\r\n\r\n",
        body.len()
    );
    stream.write_all(head.as_bytes())?;
    if !head_only {
        stream.write_all(body)?;
    }
    stream.flush()
}

#[cfg(test)]
#[path = "serve_tests.rs"]
mod tests;
