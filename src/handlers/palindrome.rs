use crate::handlers::query_after;
use crate::http::response::{Response, ResponseBuilder, StatusCode, HTML};

pub const MARKER: &str = "palindrome?";

/// `palindrome?str1=<text>&str2=<text>`
///
/// Either parameter may be missing; an undecodable query counts as both
/// missing. The comparison is case-sensitive.
pub fn handle(target: &str) -> Response {
    let params = query_after(target, MARKER).unwrap_or_default();

    let body = format!(
        "{} and {}",
        verdict("str1", params.get("str1")),
        verdict("str2", params.get("str2"))
    );

    ResponseBuilder::new(StatusCode::Ok)
        .detail("Palindrome checked")
        .header("Content-Type", HTML)
        .body(body)
        .build()
}

fn verdict(name: &str, value: Option<&str>) -> String {
    match value {
        None => format!("{name} is null"),
        Some(s) if is_palindrome(s) => format!("{s} is a palindrome"),
        Some(s) => format!("{s} is not a palindrome"),
    }
}

pub fn is_palindrome(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    (0..n / 2).all(|i| chars[i] == chars[n - 1 - i])
}
