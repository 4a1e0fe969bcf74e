pub const HTML: &str = "text/html; charset=utf-8";
pub const JSON: &str = "application/json; charset=utf-8";

/// HTTP status codes produced by the route handlers.
///
/// - `Ok` (200): Request handled (also used for the illegal-request reply)
/// - `BadRequest` (400): Missing or malformed parameters, unknown route
/// - `NotFound` (404): Requested file does not exist
/// - `InternalServerError` (500): A served file could not be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use funserver::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Status text; the standard phrase, optionally followed by a detail
    pub reason: String,
    /// Headers in the order they are written
    pub headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use funserver::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::BadRequest)
///     .detail("No query")
///     .header("Content-Type", "text/html; charset=utf-8")
///     .body("No query")
///     .build();
/// assert_eq!(response.reason, "Bad Request, No query");
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    reason: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            reason: status.reason_phrase().to_string(),
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Appends `, <detail>` to the reason phrase.
    pub fn detail(mut self, detail: &str) -> Self {
        self.reason.push_str(", ");
        self.reason.push_str(detail);
        self
    }

    /// Adds a header, replacing an existing one with the same name in place.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&key))
        {
            Some((_, existing)) => *existing = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the final Response. No Content-Length is added: the body ends
    /// when the connection closes.
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            reason: self.reason,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Creates an HTML response with the given status and body.
    pub fn html(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(status)
            .header("Content-Type", HTML)
            .body(body)
            .build()
    }

    /// Creates a simple 200 OK HTML response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::html(StatusCode::Ok, body)
    }

    /// Creates a 500 response carrying the error text.
    pub fn internal_error(message: impl std::fmt::Display) -> Self {
        Self::html(
            StatusCode::InternalServerError,
            format!("<html>ERROR: {message}</html>"),
        )
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// The body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
