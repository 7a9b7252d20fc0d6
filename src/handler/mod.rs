//! Request handler module
//!
//! Responsible for request dispatch and static file serving from the
//! registry document root.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
