//! Error Tests

use bindcheck_domain::{Error, MissingBinding, TypeKey, VerificationReport};
use std::error::Error as _;

struct Service;
struct Repository;

fn failing_report(name: &str) -> VerificationReport {
    let mut report = VerificationReport::new(name);
    report.push(MissingBinding::new(
        TypeKey::of::<Service>(),
        TypeKey::of::<Repository>(),
    ));
    report
}

#[test]
fn test_missing_bindings_message_is_the_report() {
    let report = failing_report("app");
    let error = Error::missing_bindings(report.clone());

    assert_eq!(error.to_string(), report.to_string());
    assert_eq!(error.report(), Some(&report));
}

#[test]
fn test_introspection_error() {
    let error = Error::introspection("app::Service", "no signature");

    assert!(error.report().is_none());
    assert_eq!(
        error.to_string(),
        "Introspection error for 'app::Service': no signature"
    );
}

#[test]
fn test_configuration_error_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error = Error::configuration_with_source("Failed to read", io);

    assert!(error.source().is_some());
    assert!(Error::configuration("bad").source().is_none());
}

#[test]
fn test_batch_error_lists_each_failure() {
    let error = Error::Batch {
        total: 3,
        failures: vec![
            Error::missing_bindings(failing_report("first")),
            Error::missing_bindings(failing_report("third")),
        ],
    };
    let rendered = error.to_string();

    assert!(rendered.starts_with("2 of 3 configuration(s) failed verification"));
    assert!(rendered.contains("'first'"));
    assert!(rendered.contains("'third'"));
}

#[test]
fn test_json_error_converts_and_keeps_source() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated JSON");
    let error = Error::from(json_error);

    assert!(matches!(error, Error::Json { .. }));
    assert!(error.to_string().starts_with("JSON serialization error"));
    assert!(error.source().is_some());
    assert!(error.clone().report().is_none());
}
