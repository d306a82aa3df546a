//! Error Extension Tests

use bindcheck_domain::Error;
use bindcheck_infrastructure::ErrorContext;
use std::error::Error as _;

fn io_failure() -> std::io::Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied",
    ))
}

#[test]
fn test_config_context_wraps_source() {
    let error = io_failure()
        .config_context("Failed to read bindcheck.toml")
        .expect_err("io failure");

    assert!(matches!(error, Error::Configuration { .. }));
    assert!(
        error
            .to_string()
            .contains("Failed to read bindcheck.toml: access denied")
    );
    assert!(error.source().is_some());
}

#[test]
fn test_with_config_context_is_lazy() {
    let mut evaluated = false;
    let ok: std::io::Result<u8> = Ok(7);

    let value = ok
        .with_config_context(|| {
            evaluated = true;
            "never shown"
        })
        .expect("ok passes through");

    assert_eq!(value, 7);
    assert!(!evaluated);
}
