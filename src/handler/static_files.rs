//! Static file serving module
//!
//! Resolves request paths beneath the document root and builds file, index,
//! and directory-listing responses.

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::{self, conditional, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Outcome of resolving a request path against the document root
#[derive(Debug, PartialEq, Eq)]
pub enum Resolved {
    /// An existing file to serve
    File(PathBuf),
    /// An existing directory with no index file; render a listing
    Listing(PathBuf),
    /// A directory requested without its trailing slash
    Redirect(String),
}

/// Serve a request path from the document root
pub async fn serve(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    match resolve_path(&state.root, ctx.path, &state.index_files) {
        Some(Resolved::File(path)) => serve_file(ctx, &path).await,
        Some(Resolved::Listing(path)) => serve_listing(ctx, &path).await,
        Some(Resolved::Redirect(target)) => http::build_redirect_response(&target),
        None => http::build_404_response(),
    }
}

/// Resolve a request path to a file or directory inside the document root.
///
/// Parent segments are stripped before joining; the canonicalized result must
/// stay inside the canonicalized root, which also rejects symlinks pointing
/// out of it. Returns `None` when the path does not resolve.
pub fn resolve_path(root: &Path, request_path: &str, index_files: &[String]) -> Option<Resolved> {
    let decoded = percent_decode(request_path);
    let clean = decoded.trim_start_matches('/').replace("..", "");

    let root_canonical = match root.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Document root not found or inaccessible '{}': {e}",
                root.display()
            ));
            return None;
        }
    };

    let target = root_canonical.join(clean);

    // Path not resolving is common (404), no need to log
    let canonical = target.canonicalize().ok()?;
    if !canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            request_path,
            canonical.display()
        ));
        return None;
    }

    if !canonical.is_dir() {
        return Some(Resolved::File(canonical));
    }

    // Directory URLs need the trailing slash so relative links in index pages
    // and listings resolve beneath the directory.
    if !decoded.ends_with('/') {
        return Some(Resolved::Redirect(format!("{request_path}/")));
    }

    for index in index_files {
        let candidate = canonical.join(index);
        if candidate.is_file() {
            return Some(Resolved::File(candidate));
        }
    }

    Some(Resolved::Listing(canonical))
}

/// Decode percent-encoded octets in a request path.
///
/// Invalid escapes are kept verbatim.
pub fn percent_decode(path: &str) -> String {
    let bytes = path.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Serve a resolved file, honoring `If-Modified-Since`
async fn serve_file(ctx: &RequestContext<'_>, path: &Path) -> Response<Full<Bytes>> {
    let mtime = match fs::metadata(path).await {
        Ok(metadata) => metadata.modified().ok(),
        Err(e) => {
            logger::log_error(&format!("Failed to stat file '{}': {e}", path.display()));
            return http::build_404_response();
        }
    };
    let last_modified = mtime.map(conditional::format_http_date);

    if let Some(mtime) = mtime {
        if conditional::not_modified(ctx.if_modified_since.as_deref(), mtime) {
            return http::build_304_response(last_modified.as_deref());
        }
    }

    let content = match fs::read(path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!("Failed to read file '{}': {e}", path.display()));
            return http::build_404_response();
        }
    };

    let content_type = mime::get_content_type(path.extension().and_then(|e| e.to_str()));
    http::build_file_response(
        Bytes::from(content),
        content_type,
        last_modified.as_deref(),
        ctx.is_head,
    )
}

/// Serve a generated directory listing
async fn serve_listing(ctx: &RequestContext<'_>, dir: &Path) -> Response<Full<Bytes>> {
    match render_listing(dir, ctx.path).await {
        Some(html) => http::build_html_response(html, ctx.is_head),
        None => http::build_404_response(),
    }
}

/// Render a plain HTML listing of a directory, entries sorted by name.
/// Directory entries get a trailing slash, as in the inherited default
/// behavior of the original deployment.
pub async fn render_listing(dir: &Path, request_path: &str) -> Option<String> {
    let mut entries = fs::read_dir(dir).await.ok()?;
    let mut names = Vec::new();
    while let Ok(Some(entry)) = entries.next_entry().await {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await.is_ok_and(|t| t.is_dir()) {
            name.push('/');
        }
        names.push(name);
    }
    names.sort();

    let title = format!("Directory listing for {request_path}");
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{title}</h1>\n<hr>\n<ul>\n"));
    for name in &names {
        html.push_str(&format!("<li><a href=\"{name}\">{name}</a></li>\n"));
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    Some(html)
}
