//! Component Signature Registry
//!
//! Introspection implementations. Dependency lists are captured when a
//! component is registered rather than read by reflection at run time:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                    Signature Registration Flow                   │
//! ├──────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │  1. Component defines: #[linkme::distributed_slice(              │
//! │                            COMPONENT_SIGNATURES)]                │
//! │                        static SIG: ComponentSignature = ...      │
//! │                              ↓                                   │
//! │  2. LinkedSignatures:  COMPONENT_SIGNATURES.iter() → index       │
//! │                              ↓                                   │
//! │  3. Verifier queries:  dependencies(&declaration)                │
//! │                        (falls back to captured descriptors)      │
//! │                                                                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering a signature
//!
//! ```ignore
//! use bindcheck_application::signatures::{ComponentSignature, COMPONENT_SIGNATURES};
//! use bindcheck_domain::DependencyDescriptor;
//!
//! #[linkme::distributed_slice(COMPONENT_SIGNATURES)]
//! static USER_SERVICE: ComponentSignature = ComponentSignature::of::<UserService>(|| {
//!     vec![DependencyDescriptor::of::<UserRepository>()]
//! });
//! ```

use bindcheck_domain::{
    Declaration, DependencyDescriptor, DependencyIntrospector, Error, Result, TypeRef,
};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Compile-time registered dependency list of one component type
pub struct ComponentSignature {
    /// Identity of the component type
    pub component: fn() -> TypeRef,
    /// Ordered dependencies of the component's factory
    pub dependencies: fn() -> Vec<DependencyDescriptor>,
}

impl ComponentSignature {
    /// Signature of `T`
    pub const fn of<T: ?Sized + 'static>(dependencies: fn() -> Vec<DependencyDescriptor>) -> Self {
        Self {
            component: TypeRef::of::<T>,
            dependencies,
        }
    }
}

/// All signatures registered across linked crates
#[linkme::distributed_slice]
pub static COMPONENT_SIGNATURES: [ComponentSignature] = [..];

/// Introspector returning the descriptors captured on each declaration
#[derive(Debug, Default, Clone, Copy)]
pub struct CapturedSignatures;

impl DependencyIntrospector for CapturedSignatures {
    fn dependencies(&self, declaration: &Declaration) -> Result<Vec<DependencyDescriptor>> {
        Ok(declaration.dependencies().to_vec())
    }
}

/// Introspector backed by [`COMPONENT_SIGNATURES`]
///
/// Declarations without a registered signature fall back to their captured
/// descriptors. A type registered more than once cannot be described and
/// fails introspection.
pub struct LinkedSignatures {
    signatures: HashMap<TypeRef, fn() -> Vec<DependencyDescriptor>>,
    conflicts: HashSet<TypeRef>,
}

impl LinkedSignatures {
    /// Index every linked signature
    pub fn new() -> Self {
        Self::from_signatures(&COMPONENT_SIGNATURES)
    }

    /// Index the given signatures
    pub fn from_signatures(entries: &[ComponentSignature]) -> Self {
        let mut signatures = HashMap::new();
        let mut conflicts = HashSet::new();
        for entry in entries {
            let component = (entry.component)();
            if signatures.insert(component, entry.dependencies).is_some() {
                warn!("Component {} has more than one registered signature", component);
                conflicts.insert(component);
            }
        }
        Self {
            signatures,
            conflicts,
        }
    }

    /// Whether a signature is registered for `component`
    pub fn contains(&self, component: &TypeRef) -> bool {
        self.signatures.contains_key(component)
    }

    /// Number of distinct registered component types
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Whether no signature is registered
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

impl Default for LinkedSignatures {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyIntrospector for LinkedSignatures {
    fn dependencies(&self, declaration: &Declaration) -> Result<Vec<DependencyDescriptor>> {
        let component = declaration.key().type_ref();
        if self.conflicts.contains(&component) {
            return Err(Error::introspection(
                component.name(),
                "conflicting signatures registered",
            ));
        }
        Ok(match self.signatures.get(&component) {
            Some(dependencies) => dependencies(),
            None => declaration.dependencies().to_vec(),
        })
    }
}
