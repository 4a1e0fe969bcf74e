/// Represents a parsed HTTP request from a client.
///
/// Only the request line carries meaning; header lines are kept in arrival
/// order but no handler reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method token (always starts with `GET` once parsed)
    pub method: String,
    /// The request target with its leading character dropped
    /// (e.g. `"multiply?num1=3&num2=4"` for `/multiply?num1=3&num2=4`)
    pub target: String,
    /// Whatever follows the second space, typically `HTTP/1.1`
    pub version: String,
    /// Header lines as name/value pairs
    pub headers: Vec<(String, String)>,
}

impl Request {
    /// Retrieves a header value by name, ignoring ASCII case.
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the first matching header value, `None` otherwise.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Splits the target into its path part and the raw query after `?`.
    pub fn path_and_query(&self) -> (&str, Option<&str>) {
        match self.target.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (self.target.as_str(), None),
        }
    }
}
