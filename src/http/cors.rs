//! CORS response post-processing module
//!
//! The registry client runs in a browser on a different origin, so every
//! response carries an allow-all-origins header. The header is applied as a
//! wrapper around the request handler rather than inside each response
//! builder, so error responses get it too.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN};
use hyper::Response;

/// Origin value sent on every response.
pub const ALLOW_ORIGIN: &str = "*";

/// Append `Access-Control-Allow-Origin: *` to a response.
pub fn apply_cors(mut response: Response<Full<Bytes>>) -> Response<Full<Bytes>> {
    response.headers_mut().insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::response::build_404_response;

    #[test]
    fn test_header_added_to_error_response() {
        let response = apply_cors(build_404_response());
        assert_eq!(response.status(), 404);
        assert_eq!(
            response
                .headers()
                .get(ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }

    #[test]
    fn test_header_is_not_duplicated() {
        let response = apply_cors(apply_cors(build_404_response()));
        let values: Vec<_> = response
            .headers()
            .get_all(ACCESS_CONTROL_ALLOW_ORIGIN)
            .iter()
            .collect();
        assert_eq!(values.len(), 1);
    }
}
