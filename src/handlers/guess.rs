//! Guessing game: two guesses against a fresh answer in `[0, 10)`.

use crate::handlers::query_after;
use crate::http::query::QueryParams;
use crate::http::response::{Response, ResponseBuilder, StatusCode, HTML};
use crate::services::RandomSource;

pub const MARKER: &str = "guess?";
pub const ANSWER_BOUND: usize = 10;
pub const OUT_OF_RANGE: &str = "num1 and num2 must stay between 0 and 10";

/// `guess?num1=<0..=10>&num2=<0..=10>`
pub fn handle<R: RandomSource>(rng: &R, target: &str) -> Response {
    let answer = rng.next_int(ANSWER_BOUND) as i32;

    let params = match query_after(target, MARKER) {
        Ok(params) => params,
        Err(e) => {
            return bad_request(
                "Neither parameter used",
                format!("{e}. Make sure to use all parameters"),
            );
        }
    };

    let (num1, num2) = match guesses(&params) {
        Ok(pair) => pair,
        Err(message) => {
            return bad_request(
                "One parameter missing",
                format!("{message} Make sure to use all parameters"),
            );
        }
    };

    if !(0..=10).contains(&num1) || !(0..=10).contains(&num2) {
        return bad_request("Guess not in range", OUT_OF_RANGE.to_string());
    }

    let body = if num1 == answer || num2 == answer {
        format!("Correct the answer is: {answer}")
    } else {
        format!(
            "Wrong, num1 is {} off and num2 is {} off",
            num1.abs_diff(answer),
            num2.abs_diff(answer)
        )
    };

    ResponseBuilder::new(StatusCode::Ok)
        .detail("Guessing game played")
        .header("Content-Type", HTML)
        .body(body)
        .build()
}

fn guesses(params: &QueryParams) -> Result<(i32, i32), String> {
    Ok((number(params, "num1")?, number(params, "num2")?))
}

fn number(params: &QueryParams, name: &str) -> Result<i32, String> {
    let raw = params
        .get(name)
        .ok_or_else(|| format!("{name} is missing."))?;
    raw.parse()
        .map_err(|_| format!("{name} is not a number: {raw:?}."))
}

fn bad_request(detail: &str, body: String) -> Response {
    ResponseBuilder::new(StatusCode::BadRequest)
        .detail(detail)
        .header("Content-Type", HTML)
        .body(body)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(usize);

    impl RandomSource for Fixed {
        fn next_int(&self, _bound: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn correct_guess() {
        let resp = handle(&Fixed(4), "guess?num1=4&num2=9");
        assert_eq!(resp.status, StatusCode::Ok);
        assert_eq!(resp.text(), "Correct the answer is: 4");
    }

    #[test]
    fn distances_are_absolute() {
        let resp = handle(&Fixed(4), "guess?num1=1&num2=10");
        assert_eq!(resp.text(), "Wrong, num1 is 3 off and num2 is 6 off");
        assert_eq!(resp.reason, "OK, Guessing game played");
    }

    #[test]
    fn negative_guess_is_out_of_range() {
        let resp = handle(&Fixed(0), "guess?num1=-1&num2=5");
        assert_eq!(resp.status, StatusCode::BadRequest);
        assert_eq!(resp.text(), OUT_OF_RANGE);
    }

    #[test]
    fn missing_parameter() {
        let resp = handle(&Fixed(0), "guess?num1=3");
        assert_eq!(resp.status, StatusCode::BadRequest);
        assert_eq!(resp.reason, "Bad Request, One parameter missing");
        assert!(resp.text().starts_with("num2 is missing."));
    }

    #[test]
    fn malformed_query() {
        let resp = handle(&Fixed(0), "guess?num1");
        assert_eq!(resp.reason, "Bad Request, Neither parameter used");
    }
}
