//! # Domain Layer
//!
//! Core types for static verification of dependency-injection configurations.
//! Nothing in this crate knows how a configuration is authored or how its
//! components are instantiated; it only models what a verification run reads
//! and what it reports.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Type identities, dependency descriptors, declarations, injections, reports |
//! | [`ports`] | Collaborator interfaces (configuration, introspection, reporting) |
//! | [`error`] | Domain error type and `Result` alias |

#[macro_use]
pub mod macros;

pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Configuration, DependencyIntrospector, VerificationReporter};
pub use value_objects::{
    ContainerKind, Declaration, DependencyDescriptor, InjectionScope, MissingBinding,
    ParameterInjection, Qualifier, RequiredType, Scope, TypeKey, TypeRef, VerificationReport,
};
