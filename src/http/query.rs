//! Query-string decoding.
//!
//! Splits `key=value&key=value` into decoded pairs using form-encoding rules:
//! `+` is a space and `%XX` escapes are UTF-8 bytes.

use percent_encoding::percent_decode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("query segment {0:?} has no '=' separator")]
    MissingSeparator(String),

    #[error("malformed percent escape in {0:?}")]
    MalformedEscape(String),

    #[error("{0:?} does not decode to valid UTF-8")]
    InvalidEncoding(String),
}

/// Decoded query parameters in first-insertion order.
///
/// A repeated key keeps its original position and takes the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Decodes a raw query string (the part after `?`).
///
/// An empty query yields no parameters. Trailing `&` separators are
/// ignored; any other segment without `=` is rejected.
///
/// # Example
///
/// ```
/// # use funserver::http::query::decode;
/// let params = decode("q=hello+world%2Fme&bob=5").unwrap();
/// assert_eq!(params.get("q"), Some("hello world/me"));
/// assert_eq!(params.get("bob"), Some("5"));
/// ```
pub fn decode(query: &str) -> Result<QueryParams, QueryError> {
    let mut params = QueryParams::new();
    let query = query.trim_end_matches('&');

    if query.is_empty() {
        return Ok(params);
    }

    for segment in query.split('&') {
        let (key, value) = segment
            .split_once('=')
            .ok_or_else(|| QueryError::MissingSeparator(segment.to_string()))?;

        params.insert(decode_component(key)?, decode_component(value)?);
    }

    Ok(params)
}

fn decode_component(raw: &str) -> Result<String, QueryError> {
    let bytes = raw.as_bytes();

    // percent_decode passes bad escapes through untouched, so check them first
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(QueryError::MalformedEscape(raw.to_string()));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    let spaced: Vec<u8> = bytes
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();

    percent_decode(&spaced)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| QueryError::InvalidEncoding(raw.to_string()))
}
