//! Parameter injection allowances of one run

use bindcheck_domain::{Declaration, InjectionScope, ParameterInjection, TypeKey, TypeRef};
use std::collections::{HashMap, HashSet};

/// Indexed allowances: global types plus types allowed per declaration identity
#[derive(Debug, Clone, Default)]
pub struct InjectionAllowances {
    global: HashSet<TypeRef>,
    scoped: HashMap<TypeKey, HashSet<TypeRef>>,
}

impl InjectionAllowances {
    /// Index the allowances passed to a run
    pub fn new(injections: &[ParameterInjection]) -> Self {
        let mut allowances = Self::default();
        for injection in injections {
            match injection.scope() {
                InjectionScope::Global => {
                    allowances.global.extend(injection.injected().iter().copied());
                }
                InjectionScope::Declarations(owners) => {
                    for owner in owners {
                        allowances
                            .scoped
                            .entry(owner.clone())
                            .or_default()
                            .extend(injection.injected().iter().copied());
                    }
                }
            }
        }
        allowances
    }

    /// Whether `ty` is supplied at resolution time for `owner`
    pub fn allows(&self, ty: &TypeRef, owner: &Declaration) -> bool {
        self.global.contains(ty)
            || owner.bound_keys().any(|key| {
                self.scoped
                    .get(key)
                    .is_some_and(|allowed| allowed.contains(ty))
            })
    }

    /// Whether no allowance was declared
    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.scoped.is_empty()
    }
}
