//! Verification reporters
//!
//! [`VerificationReporter`] implementations selected by
//! [`ReporterKind`](crate::config::ReporterKind).

use bindcheck_domain::{VerificationReport, VerificationReporter};
use std::time::Duration;
use tracing::{info, warn};

/// Reporter emitting `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl VerificationReporter for TracingReporter {
    fn started(&self, configuration: &str) {
        info!(configuration, "Verifying configuration");
    }

    fn succeeded(&self, configuration: &str, elapsed: Duration) {
        info!(
            configuration,
            elapsed = %humantime::format_duration(elapsed),
            "Configuration verified"
        );
    }

    fn failed(&self, report: &VerificationReport, elapsed: Duration) {
        warn!(
            configuration = report.configuration(),
            missing = report.len(),
            elapsed = %humantime::format_duration(elapsed),
            "Configuration has missing bindings"
        );
        for missing in report.missing() {
            warn!(
                component = %missing.component,
                dependency = %missing.dependency,
                "Missing binding"
            );
        }
    }
}

/// Reporter printing progress lines on stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Line printed before a run
    pub fn started_line(configuration: &str) -> String {
        format!("Verifying configuration '{configuration}' ...")
    }

    /// Line printed after a successful run
    pub fn success_line(configuration: &str, elapsed: Duration) -> String {
        format!(
            "[SUCCESS] configuration '{configuration}' has been verified in {}.",
            humantime::format_duration(elapsed)
        )
    }

    /// Lines printed after a failed run
    pub fn failure_lines(report: &VerificationReport, elapsed: Duration) -> String {
        format!(
            "[FAILURE] {report}\n(verified in {})",
            humantime::format_duration(elapsed)
        )
    }
}

impl VerificationReporter for ConsoleReporter {
    fn started(&self, configuration: &str) {
        println!("{}", Self::started_line(configuration));
    }

    fn succeeded(&self, configuration: &str, elapsed: Duration) {
        println!("\n{}", Self::success_line(configuration, elapsed));
    }

    fn failed(&self, report: &VerificationReport, elapsed: Duration) {
        println!("\n{}", Self::failure_lines(report, elapsed));
    }
}
