//! Verification Reporter Port
//!
//! Receives progress notifications from a verification run. Reporting is
//! observability only; nothing a reporter does changes the outcome.

use crate::value_objects::VerificationReport;
use std::time::Duration;

/// Verification progress reporter interface
pub trait VerificationReporter: Send + Sync {
    /// A run over `configuration` is about to start
    fn started(&self, configuration: &str);

    /// Every dependency of `configuration` resolved
    fn succeeded(&self, configuration: &str, elapsed: Duration);

    /// The run over `configuration` found missing bindings
    fn failed(&self, report: &VerificationReport, elapsed: Duration);
}
