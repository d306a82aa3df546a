//! # bindcheck
//!
//! Static verification of dependency-injection configurations: every
//! dependency a declared component requires must have a binding reachable
//! from the same configuration. Nothing is instantiated.
//!
//! ## Example
//!
//! ```ignore
//! use bindcheck::{DependencyDescriptor, Module, VerifyExt, types};
//!
//! let module = Module::new("app")
//!     .single::<Database>([DependencyDescriptor::of::<String>()])
//!     .factory::<UserService>([
//!         DependencyDescriptor::of::<Database>(),
//!         DependencyDescriptor::lazy::<Mailer>(),
//!     ]);
//!
//! // Fails: Mailer has no binding and is not an extra type
//! assert!(module.verify(&[], &[]).is_err());
//! // Passes
//! module.verify(&types![Mailer], &[])?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - type identities, declarations, reports, ports, errors
//! - `application` - declaration catalog, resolution policy, verification engine
//! - `infrastructure` - settings, logging, reporters, verifier bootstrap

/// Domain layer - value objects, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use bindcheck_domain::*;
}

/// Application layer - catalog, policy and verification engine
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use bindcheck_application::*;
}

/// Infrastructure layer - settings, logging and reporters
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use bindcheck_infrastructure::*;
}

// Re-export commonly used types at the crate root
pub use bindcheck_application::{
    BatchOutcome, BatchReport, ExemptionRegistry, Module, Verification, VerificationState,
    Verifier,
};
pub use bindcheck_domain::*;
pub use bindcheck_infrastructure::{VerifierConfig, load_verifier};

use bindcheck_infrastructure::build_verifier;

/// Verifier built from default settings and the process-wide exemption registry
pub fn default_verifier() -> Verifier {
    build_verifier(&VerifierConfig::default())
}

/// Verify one configuration with default settings
///
/// `extra_types` are exempted for this call only, on top of the primitives and
/// the types registered with [`register_extra_types`].
pub fn verify(
    configuration: &dyn Configuration,
    extra_types: &[TypeRef],
    injections: &[ParameterInjection],
) -> Result<()> {
    default_verifier().verify(configuration, extra_types, injections)
}

/// Verify each configuration independently, in order, with default settings
pub fn verify_all(
    configurations: &[&dyn Configuration],
    extra_types: &[TypeRef],
    injections: &[ParameterInjection],
) -> BatchReport {
    default_verifier().verify_all(configurations, extra_types, injections)
}

/// Append types to the process-wide exemption registry
///
/// Meant for shared test setup, before any verification runs. Runs already in
/// flight keep the snapshot they started with.
pub fn register_extra_types(types: impl IntoIterator<Item = TypeRef>) {
    ExemptionRegistry::global().register(types);
}

/// `verify` as a method on any configuration
pub trait VerifyExt: Configuration + Sized {
    /// Verify this configuration with default settings
    fn verify(&self, extra_types: &[TypeRef], injections: &[ParameterInjection]) -> Result<()> {
        verify(self, extra_types, injections)
    }
}

impl<T: Configuration> VerifyExt for T {}
