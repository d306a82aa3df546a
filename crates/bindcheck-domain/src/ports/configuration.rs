//! Configuration Port
//!
//! Defines the contract for a dependency-injection configuration as seen by the
//! verifier. The verifier never mutates a configuration.

use crate::value_objects::Declaration;

/// A configuration: its own declarations plus the configurations it includes
///
/// Override resolution belongs to the implementor. The verifier indexes the
/// declarations exactly as they are enumerated.
pub trait Configuration: Send + Sync {
    /// Name used in reports and progress output
    fn name(&self) -> &str;

    /// Declarations owned by this configuration, in declaration order
    fn declarations(&self) -> &[Declaration];

    /// Directly included configurations, in inclusion order
    fn includes(&self) -> Vec<&dyn Configuration>;
}
