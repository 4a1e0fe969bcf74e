//! Route handlers
//!
//! Every handler turns a request target into a complete [`Response`];
//! failures are reported in-band and never propagate to the connection.

pub mod file;
pub mod github;
pub mod guess;
pub mod images;
pub mod multiply;
pub mod palindrome;
pub mod root;

use crate::http::query::{self, QueryError, QueryParams};
use crate::http::response::{HTML, Response, ResponseBuilder, StatusCode};

pub const ILLEGAL_REQUEST: &str = "Illegal request: no GET";
pub const UNRECOGNIZED: &str = "I am not sure what you want me to do...";

/// Reply for a request without a usable GET line.
///
/// Answered with 200 for compatibility with existing clients.
pub fn illegal_request() -> Response {
    Response::ok(ILLEGAL_REQUEST)
}

/// Reply for targets no route claims.
pub fn unrecognized() -> Response {
    Response::html(StatusCode::BadRequest, UNRECOGNIZED)
}

/// Reply for a request head over the read limit.
pub fn head_too_large(limit: usize) -> Response {
    ResponseBuilder::new(StatusCode::BadRequest)
        .detail("Request head too large")
        .header("Content-Type", HTML)
        .body(format!("Request line and headers must fit in {limit} bytes"))
        .build()
}

/// Removes every occurrence of `marker` from `target`.
pub fn strip_marker(target: &str, marker: &str) -> String {
    target.replace(marker, "")
}

/// Strips `marker` and decodes what is left as a query string.
pub fn query_after(target: &str, marker: &str) -> Result<QueryParams, QueryError> {
    query::decode(&strip_marker(target, marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_is_stripped_everywhere() {
        assert_eq!(strip_marker("multiply?a=1", "multiply?"), "a=1");
        assert_eq!(strip_marker("x/file/y/file/z", "file/"), "x/y/z");
    }

    #[test]
    fn query_after_marker() {
        let params = query_after("guess?num1=1&num2=2", "guess?").unwrap();
        assert_eq!(params.get("num2"), Some("2"));
    }
}
