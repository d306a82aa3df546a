//! Null reporter
//!
//! Default [`VerificationReporter`] of the application layer. Tracing and
//! console reporters live in the infrastructure crate.

use bindcheck_domain::{VerificationReport, VerificationReporter};
use std::time::Duration;

/// Reporter that discards every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NullVerificationReporter;

impl VerificationReporter for NullVerificationReporter {
    fn started(&self, _configuration: &str) {}

    fn succeeded(&self, _configuration: &str, _elapsed: Duration) {}

    fn failed(&self, _report: &VerificationReport, _elapsed: Duration) {}
}
