//! Verifier Bootstrap
//!
//! Composition root turning a [`VerifierConfig`] into a ready [`Verifier`].
//!
//! ```text
//! VerifierConfig ──► reporter (console | tracing | silent)
//!                ──► introspector (captured | linked registry)
//!                ──► policy (recognized containers)
//!                ──► parallel flag
//!                          ↓
//!                       Verifier
//! ```

use crate::config::{ConfigLoader, IntrospectionKind, ReporterKind, VerifierConfig};
use crate::reporters::{ConsoleReporter, TracingReporter};
use bindcheck_application::{
    CapturedSignatures, ExemptionRegistry, LinkedSignatures, NullVerificationReporter,
    ResolutionPolicy, Verifier,
};
use bindcheck_domain::{DependencyIntrospector, Result, VerificationReporter};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Build a verifier seeded from the process-wide exemption registry
pub fn build_verifier(config: &VerifierConfig) -> Verifier {
    build_verifier_with_registry(config, ExemptionRegistry::global())
}

/// Build a verifier seeded from `registry`
pub fn build_verifier_with_registry(
    config: &VerifierConfig,
    registry: Arc<ExemptionRegistry>,
) -> Verifier {
    debug!(
        parallel = config.parallel,
        reporter = ?config.reporter,
        introspection = ?config.introspection,
        "Building verifier"
    );

    Verifier::builder()
        .policy(ResolutionPolicy::new(config.container_kinds()))
        .introspector(introspector_for(config.introspection))
        .reporter(reporter_for(config.reporter))
        .registry(registry)
        .parallel(config.parallel)
        .build()
}

/// Load configuration (optionally from `path`) and build a verifier from it
pub fn load_verifier(path: Option<&Path>) -> Result<Verifier> {
    let loader = match path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(build_verifier(&loader.load()?))
}

/// Reporter implementation for `kind`
pub fn reporter_for(kind: ReporterKind) -> Arc<dyn VerificationReporter> {
    match kind {
        ReporterKind::Console => Arc::new(ConsoleReporter),
        ReporterKind::Tracing => Arc::new(TracingReporter),
        ReporterKind::Silent => Arc::new(NullVerificationReporter),
    }
}

/// Introspector implementation for `kind`
pub fn introspector_for(kind: IntrospectionKind) -> Arc<dyn DependencyIntrospector> {
    match kind {
        IntrospectionKind::Captured => Arc::new(CapturedSignatures),
        IntrospectionKind::Linked => Arc::new(LinkedSignatures::new()),
    }
}
