//! Logging Tests

use bindcheck_infrastructure::logging::{LoggingConfig, init_logging, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").ok(), Some(Level::TRACE));
    assert_eq!(parse_log_level("DEBUG").ok(), Some(Level::DEBUG));
    assert_eq!(parse_log_level("info").ok(), Some(Level::INFO));
    assert_eq!(parse_log_level("warning").ok(), Some(Level::WARN));
    assert_eq!(parse_log_level("error").ok(), Some(Level::ERROR));
}

#[test]
fn test_parse_log_level_rejects_unknown() {
    let error = parse_log_level("verbose").expect_err("unknown level");

    assert!(error.to_string().contains("Invalid log level: verbose"));
}

#[test]
fn test_init_logging_rejects_invalid_level_before_installing() {
    let config = LoggingConfig {
        level: "loud".to_string(),
        ..Default::default()
    };

    assert!(init_logging(&config).is_err());
}
