//! Domain Port Interfaces
//!
//! Collaborators a verification run depends on but does not implement:
//!
//! - **configuration** - enumerates declarations and included configurations
//! - **introspection** - describes the dependencies of a declared component
//! - **reporter** - receives progress and outcome notifications

pub mod configuration;
pub mod introspection;
pub mod reporter;

pub use configuration::Configuration;
pub use introspection::DependencyIntrospector;
pub use reporter::VerificationReporter;
