//! Exemption Set and registry
//!
//! Types in the exemption set are satisfiable without any catalog binding.
//! The effective set of a run is the union of:
//!
//! 1. the primitive whitelist ([`primitive_types`]),
//! 2. a snapshot of an [`ExemptionRegistry`] taken when the run starts,
//! 3. the extra types passed to that run.
//!
//! The registry is append-only. Because each run works on its own snapshot,
//! registrations made while a run is in flight only affect later runs.

use bindcheck_domain::TypeRef;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Process-wide registry shared by every verifier that does not get its own
static GLOBAL_REGISTRY: Lazy<Arc<ExemptionRegistry>> =
    Lazy::new(|| Arc::new(ExemptionRegistry::new()));

/// Primitive types that never need a binding: text, integer, long integer, floating point
pub fn primitive_types() -> [TypeRef; 5] {
    [
        TypeRef::of::<String>(),
        TypeRef::of::<&'static str>(),
        TypeRef::of::<i32>(),
        TypeRef::of::<i64>(),
        TypeRef::of::<f64>(),
    ]
}

/// Append-only registry of extra exempted types
///
/// Intended to be populated once, during shared test setup, before any
/// verification runs.
#[derive(Debug, Default)]
pub struct ExemptionRegistry {
    types: RwLock<Vec<TypeRef>>,
}

impl ExemptionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL_REGISTRY)
    }

    /// Append exempted types
    pub fn register(&self, types: impl IntoIterator<Item = TypeRef>) {
        let mut registered = self.types.write().unwrap_or_else(PoisonError::into_inner);
        for ty in types {
            if !registered.contains(&ty) {
                debug!("Registered extra exempted type {}", ty);
                registered.push(ty);
            }
        }
    }

    /// Append `T` to the exempted types
    pub fn register_type<T: ?Sized + 'static>(&self) {
        self.register([TypeRef::of::<T>()]);
    }

    /// Copy of the registered types, in registration order
    pub fn snapshot(&self) -> Vec<TypeRef> {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether `ty` has been registered
    pub fn contains(&self, ty: &TypeRef) -> bool {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(ty)
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Effective exemption set of one run
#[derive(Debug, Clone, Default)]
pub struct ExemptionSet {
    types: HashSet<TypeRef>,
}

impl ExemptionSet {
    /// Primitives plus a registry snapshot plus the run's extra types
    pub fn for_run(registry: &ExemptionRegistry, extra_types: &[TypeRef]) -> Self {
        let mut set = Self::primitives();
        set.extend(registry.snapshot());
        set.extend(extra_types.iter().copied());
        set
    }

    /// Only the primitive whitelist
    pub fn primitives() -> Self {
        Self {
            types: primitive_types().into_iter().collect(),
        }
    }

    /// Add exempted types
    pub fn extend(&mut self, types: impl IntoIterator<Item = TypeRef>) {
        self.types.extend(types);
    }

    /// Whether `ty` is exempted
    pub fn contains(&self, ty: &TypeRef) -> bool {
        self.types.contains(ty)
    }

    /// Number of exempted types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
