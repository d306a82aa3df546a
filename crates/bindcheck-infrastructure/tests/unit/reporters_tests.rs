//! Reporter Tests

use bindcheck_domain::{MissingBinding, TypeKey, VerificationReport, VerificationReporter};
use bindcheck_infrastructure::{ConsoleReporter, TracingReporter};
use std::time::Duration;

struct Service;
struct Repository;

fn report() -> VerificationReport {
    let mut report = VerificationReport::new("app");
    report.push(MissingBinding::new(
        TypeKey::of::<Service>(),
        TypeKey::of::<Repository>(),
    ));
    report
}

#[test]
fn test_console_started_line() {
    assert_eq!(
        ConsoleReporter::started_line("app"),
        "Verifying configuration 'app' ..."
    );
}

#[test]
fn test_console_success_line_formats_duration() {
    assert_eq!(
        ConsoleReporter::success_line("app", Duration::from_millis(1500)),
        "[SUCCESS] configuration 'app' has been verified in 1s 500ms."
    );
}

#[test]
fn test_console_failure_lines_include_report() {
    let lines = ConsoleReporter::failure_lines(&report(), Duration::from_millis(3));

    assert!(lines.starts_with("[FAILURE] configuration 'app': 1 missing binding(s)"));
    assert!(lines.contains("Repository"));
    assert!(lines.ends_with("(verified in 3ms)"));
}

#[test]
fn test_tracing_reporter_accepts_every_notification() {
    let reporter = TracingReporter;

    reporter.started("app");
    reporter.succeeded("app", Duration::from_millis(1));
    reporter.failed(&report(), Duration::from_millis(1));
}
