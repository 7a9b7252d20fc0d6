//! Logger module
//!
//! Plain stdout/stderr logging for server lifecycle and per-request access
//! lines. Deliberately not a logging framework.

use chrono::Utc;
use hyper::Method;
use std::net::SocketAddr;
use std::path::Path;

/// Startup banner: listening URL, served path, and the example component
/// locator clients of the registry proof-of-concept resolve against this
/// server. The locator is illustrative text, nothing parses it.
pub fn log_server_start(addr: &SocketAddr, root: &Path) {
    println!("Starting test registry server on http://{addr}");
    println!("Serving: {}", root.display());
    println!();
    println!("Available component:");
    println!("  remote://localhost:{}/test-skill@1.0.0", addr.port());
    println!();
    println!("Press Ctrl+C to stop");
    println!();
}

pub fn log_shutdown() {
    println!("\nShutting down server...");
}

/// One access-log line per request, loosely in common log format.
pub fn log_access(peer: &SocketAddr, method: &Method, path: &str, status: u16) {
    println!(
        "{} - - [{}] \"{} {}\" {}",
        peer.ip(),
        Utc::now().format("%d/%b/%Y:%H:%M:%S %z"),
        method,
        path,
        status
    );
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
