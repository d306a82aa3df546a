//! # Application Layer
//!
//! The verification core: builds the declaration catalog of a configuration,
//! resolves every required dependency against it and aggregates the failures.
//!
//! ```text
//! Configuration ──► DeclarationCatalog ──► Verifier ──► ResolutionPolicy
//!                                            │               (per descriptor)
//!                                            ▼
//!                                  Ok(()) | Error::MissingBindings
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use bindcheck_application::{Module, Verifier};
//! use bindcheck_domain::DependencyDescriptor;
//!
//! let module = Module::new("app")
//!     .single::<Database>([])
//!     .single::<UserService>([DependencyDescriptor::of::<Database>()]);
//!
//! Verifier::default().verify(&module, &[], &[])?;
//! ```

pub mod catalog;
pub mod engine;
pub mod exemptions;
pub mod injections;
pub mod module;
pub mod policy;
pub mod reporters;
pub mod signatures;
pub mod utils;

pub use catalog::DeclarationCatalog;
pub use engine::{
    BatchOutcome, BatchReport, Verification, VerificationState, Verifier, VerifierBuilder,
};
pub use exemptions::{ExemptionRegistry, ExemptionSet, primitive_types};
pub use injections::InjectionAllowances;
pub use module::Module;
pub use policy::{Resolution, ResolutionContext, ResolutionPolicy, Satisfaction};
pub use reporters::NullVerificationReporter;
pub use signatures::{COMPONENT_SIGNATURES, CapturedSignatures, ComponentSignature, LinkedSignatures};
pub use utils::TimedOperation;
