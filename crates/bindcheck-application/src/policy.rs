//! Type Resolution Policy
//!
//! Decides whether one dependency descriptor is satisfiable. Checks run in a
//! fixed order and the first match wins:
//!
//! 1. optional descriptor
//! 2. recognized container: unwrap one layer and start over on the element
//! 3. exempted type
//! 4. parameter injection allowance (global, or scoped to the owning declaration)
//! 5. catalog binding for the exact type and qualifier

use crate::catalog::DeclarationCatalog;
use crate::exemptions::ExemptionSet;
use crate::injections::InjectionAllowances;
use bindcheck_domain::{
    ContainerKind, Declaration, DependencyDescriptor, Qualifier, RequiredType, TypeKey,
};
use std::collections::HashSet;

/// Why a descriptor is satisfiable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Satisfaction {
    /// Nullable dependency
    Optional,
    /// Type is in the exemption set
    Exempt,
    /// Type is supplied as a runtime parameter
    Injected,
    /// A catalog declaration is bound to the identity
    Bound,
}

/// Outcome of resolving one descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The dependency can be provided
    Satisfied(Satisfaction),
    /// No binding exists for this identity
    Missing(TypeKey),
}

impl Resolution {
    /// Whether the dependency can be provided
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied(_))
    }
}

/// Read-only inputs of a resolution
#[derive(Debug, Clone, Copy)]
pub struct ResolutionContext<'a> {
    /// Effective declarations of the run
    pub catalog: &'a DeclarationCatalog,
    /// Exempted types of the run
    pub exemptions: &'a ExemptionSet,
    /// Parameter injection allowances of the run
    pub injections: &'a InjectionAllowances,
}

/// Resolution policy with its set of recognized container kinds
#[derive(Debug, Clone)]
pub struct ResolutionPolicy {
    containers: HashSet<ContainerKind>,
}

impl Default for ResolutionPolicy {
    fn default() -> Self {
        Self::new([ContainerKind::Lazy, ContainerKind::List])
    }
}

impl ResolutionPolicy {
    /// Policy unwrapping the given container kinds
    pub fn new(containers: impl IntoIterator<Item = ContainerKind>) -> Self {
        Self {
            containers: containers.into_iter().collect(),
        }
    }

    /// Whether `kind` is unwrapped to its element
    pub fn recognizes(&self, kind: &ContainerKind) -> bool {
        self.containers.contains(kind)
    }

    /// Whether `descriptor`, required by `owner`, can be provided
    pub fn is_satisfiable(
        &self,
        descriptor: &DependencyDescriptor,
        context: &ResolutionContext<'_>,
        owner: &Declaration,
    ) -> bool {
        self.resolve(descriptor, context, owner).is_satisfied()
    }

    /// Resolve `descriptor`, required by `owner`, naming the identity that failed
    pub fn resolve(
        &self,
        descriptor: &DependencyDescriptor,
        context: &ResolutionContext<'_>,
        owner: &Declaration,
    ) -> Resolution {
        if descriptor.is_optional() {
            return Resolution::Satisfied(Satisfaction::Optional);
        }
        self.resolve_required(descriptor.required(), descriptor.qualifier(), context, owner)
    }

    fn resolve_required(
        &self,
        required: &RequiredType,
        qualifier: Option<&Qualifier>,
        context: &ResolutionContext<'_>,
        owner: &Declaration,
    ) -> Resolution {
        if let RequiredType::Container { kind, element, .. } = required
            && self.recognizes(kind)
        {
            return self.resolve_required(element, qualifier, context, owner);
        }

        let ty = required.outer();
        if context.exemptions.contains(&ty) {
            return Resolution::Satisfied(Satisfaction::Exempt);
        }
        if context.injections.allows(&ty, owner) {
            return Resolution::Satisfied(Satisfaction::Injected);
        }

        let key = TypeKey::new(ty, qualifier.cloned());
        match context.catalog.resolve(&key) {
            Some(_) => Resolution::Satisfied(Satisfaction::Bound),
            None => Resolution::Missing(key),
        }
    }
}
