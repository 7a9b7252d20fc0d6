//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from the
//! file-serving logic.

pub mod conditional;
pub mod cors;
pub mod mime;
pub mod response;

// Re-export commonly used helpers
pub use cors::apply_cors;
pub use response::{
    build_304_response, build_404_response, build_405_response, build_file_response,
    build_html_response, build_options_response, build_redirect_response,
};
