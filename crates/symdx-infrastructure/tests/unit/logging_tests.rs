//! Logging setup tests

use symdx_infrastructure::config::LoggingConfig;
use symdx_infrastructure::logging::{init_logging, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
    assert!(parse_log_level("loud").is_err());
}

#[test]
fn test_invalid_level_fails_before_install() {
    let config = LoggingConfig {
        level: "chatty".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(&config).is_err());
}

#[test]
fn test_second_initialization_is_an_error() {
    let config = LoggingConfig::default();
    // Another test may have installed a subscriber first; either way the
    // global slot is taken after this call.
    let _ = init_logging(&config);
    assert!(init_logging(&config).is_err());
}
