use crate::http::request::Request;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no request line received")]
    Empty,

    #[error("request line is not a GET: {0:?}")]
    NotGet(String),

    #[error("malformed request line: {0:?}")]
    MalformedRequestLine(String),

    #[error("request head exceeds {0} bytes")]
    HeadTooLarge(usize),
}

/// Incremental request-head parser.
///
/// Lines are fed one at a time, without their line terminator, until
/// [`RequestParser::feed`] reports the blank line that ends the header
/// block. A stream that ends early is finished the same way.
#[derive(Debug, Default)]
pub struct RequestParser {
    request_line: Option<String>,
    headers: Vec<(String, String)>,
    complete: bool,
}

impl RequestParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one line. Returns `true` once the header block is complete.
    pub fn feed(&mut self, line: &str) -> bool {
        if self.complete {
            return true;
        }

        tracing::debug!("Received: {}", line);

        if line.is_empty() {
            self.complete = true;
        } else if self.request_line.is_none() {
            self.request_line = Some(line.to_string());
        } else if let Some((name, value)) = line.split_once(':') {
            self.headers
                .push((name.trim().to_string(), value.trim().to_string()));
        }

        self.complete
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Turns the consumed lines into a [`Request`].
    ///
    /// Only the first line is inspected. It must start with `GET`; the target
    /// is the text between the two first spaces, minus the character right
    /// after the first space (normally the leading `/`).
    pub fn finish(self) -> Result<Request, ParseError> {
        tracing::debug!("Finished parsing header");

        let line = self.request_line.ok_or(ParseError::Empty)?;
        if !line.starts_with("GET") {
            return Err(ParseError::NotGet(line));
        }

        let (method, target, version) = match split_request_line(&line) {
            Some(parts) => parts,
            None => return Err(ParseError::MalformedRequestLine(line)),
        };

        Ok(Request {
            method: method.to_string(),
            target: target.to_string(),
            version: version.to_string(),
            headers: self.headers,
        })
    }
}

fn split_request_line(line: &str) -> Option<(&str, &str, &str)> {
    let (method, rest) = line.split_once(' ')?;
    let (raw_target, version) = rest.split_once(' ')?;

    // skip the leading '/' (or whatever single character sits there)
    let mut chars = raw_target.chars();
    chars.next()?;

    Some((method, chars.as_str(), version))
}

/// Parses a request head from a lazy sequence of lines.
///
/// Stops pulling lines at the first blank one, so the rest of the sequence
/// is left unconsumed.
pub fn parse_lines<I, S>(lines: I) -> Result<Request, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = RequestParser::new();
    for line in lines {
        if parser.feed(line.as_ref()) {
            break;
        }
    }
    parser.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = parse_lines(["GET /json HTTP/1.1", "Host: example.com", ""]).unwrap();

        assert_eq!(req.method, "GET");
        assert_eq!(req.target, "json");
        assert_eq!(req.header("host"), Some("example.com"));
    }

    #[test]
    fn root_target_is_empty() {
        let req = parse_lines(["GET / HTTP/1.1", ""]).unwrap();
        assert_eq!(req.target, "");
    }

    #[test]
    fn stops_at_blank_line() {
        let mut lines = vec!["GET / HTTP/1.1", "", "never read"].into_iter();
        parse_lines(lines.by_ref()).unwrap();
        assert_eq!(lines.next(), Some("never read"));
    }
}
