//! Local file server for the component registry proof-of-concept.
//!
//! Serves the `test-registry` fixture directory over HTTP and adds an
//! allow-all-origins CORS header to every response, so a browser-based
//! registry client on another origin can fetch component files.
//!
//! Modules:
//! - `config`: startup configuration and shared state
//! - `http`: protocol helpers (MIME, response builders, conditional requests, CORS)
//! - `handler`: request dispatch and static file serving
//! - `server`: listener, accept loop, and shutdown signal
//! - `logger`: plain stdout/stderr logging

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
