//! Introspection Port
//!
//! Defines the contract for describing what a declared component requires.

use crate::error::Result;
use crate::value_objects::{Declaration, DependencyDescriptor};

/// Dependency introspection interface
///
/// Implementations must be deterministic and free of side effects: the same
/// declaration always yields the same ordered descriptors.
pub trait DependencyIntrospector: Send + Sync {
    /// Ordered dependencies of the factory behind `declaration`
    fn dependencies(&self, declaration: &Declaration) -> Result<Vec<DependencyDescriptor>>;
}
