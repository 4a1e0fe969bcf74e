use crate::handlers::query_after;
use crate::http::response::{Response, StatusCode};

pub const MARKER: &str = "multiply?";
pub const USAGE: &str =
    "Must Multiply Two Numbers (i.e./multiply?num1=5&num2=10). Both parameters required.";

/// `multiply?num1=<i32>&num2=<i32>`
///
/// Products wrap on `i32` overflow.
pub fn handle(target: &str) -> Response {
    match operands(target) {
        Some((num1, num2)) => Response::ok(format!("Result is: {}", num1.wrapping_mul(num2))),
        None => Response::html(StatusCode::BadRequest, USAGE),
    }
}

fn operands(target: &str) -> Option<(i32, i32)> {
    let params = query_after(target, MARKER).ok()?;
    let num1 = params.get("num1")?.parse().ok()?;
    let num2 = params.get("num2")?.parse().ok()?;
    Some((num1, num2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplies() {
        let resp = handle("multiply?num1=-3&num2=4");
        assert_eq!(resp.status, StatusCode::Ok);
        assert_eq!(resp.text(), "Result is: -12");
    }

    #[test]
    fn overflow_wraps() {
        let resp = handle("multiply?num1=2147483647&num2=2");
        assert_eq!(resp.text(), "Result is: -2");
    }

    #[test]
    fn missing_operand() {
        let resp = handle("multiply?num1=3");
        assert_eq!(resp.status, StatusCode::BadRequest);
        assert_eq!(resp.text(), USAGE);
    }
}
