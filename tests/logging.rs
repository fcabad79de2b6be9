// tests/logging.rs

use must::errors::MustError;
use must::logging::{init_logging, parse_level_str};

#[test]
fn parses_level_names_loosely() {
    assert_eq!(parse_level_str("debug"), Some(tracing::Level::DEBUG));
    assert_eq!(parse_level_str(" WARNING "), Some(tracing::Level::WARN));
    assert_eq!(parse_level_str("Trace"), Some(tracing::Level::TRACE));
    assert_eq!(parse_level_str("loud"), None);
}

#[test]
fn second_init_is_an_error_not_a_panic() {
    init_logging(Some(tracing::Level::DEBUG)).unwrap();

    let again = init_logging(None);

    assert!(matches!(again, Err(MustError::Other(_))));
}
