use funserver::http::query::{QueryError, decode};
use url::form_urlencoded;

fn encode(pairs: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

#[test]
fn test_round_trip_printable_ascii() {
    let pairs = [("a", "b c"), ("d", "1"), ("sym", "!\"#$%&'()*+,-./:;<=>?@[]^_`{|}~")];
    let params = decode(&encode(&pairs)).unwrap();

    let decoded: Vec<(&str, &str)> = params.iter().collect();
    assert_eq!(decoded, pairs.to_vec());
}

#[test]
fn test_empty_query_is_empty() {
    assert!(decode("").unwrap().is_empty());
}

#[test]
fn test_trailing_separator_is_ignored() {
    let params = decode("a=1&").unwrap();
    assert_eq!(params.len(), 1);
}

#[test]
fn test_segment_without_equals_fails() {
    assert_eq!(
        decode("a=1&b"),
        Err(QueryError::MissingSeparator("b".to_string()))
    );
}

#[test]
fn test_empty_inner_segment_fails() {
    assert!(matches!(decode("a=1&&b=2"), Err(QueryError::MissingSeparator(_))));
}

#[test]
fn test_malformed_escape_fails() {
    assert!(matches!(decode("a=%zz"), Err(QueryError::MalformedEscape(_))));
}

#[test]
fn test_invalid_utf8_fails() {
    assert!(matches!(decode("a=%ff"), Err(QueryError::InvalidEncoding(_))));
}

#[test]
fn test_duplicate_key_last_value_wins() {
    let params = decode("k=1&x=2&k=3").unwrap();
    assert_eq!(params.get("k"), Some("3"));

    let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["k", "x"]);
}

#[test]
fn test_missing_key_yields_no_entry() {
    let params = decode("a=1").unwrap();
    assert_eq!(params.get("b"), None);
}

#[test]
fn test_only_first_equals_splits() {
    let params = decode("expr=1=1").unwrap();
    assert_eq!(params.get("expr"), Some("1=1"));
}
