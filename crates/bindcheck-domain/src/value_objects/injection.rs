//! Parameter injection allowances
//!
//! Some factory inputs are handed over by the caller at resolution time
//! instead of being resolved from the graph. An allowance exempts such types
//! from the catalog lookup, either for every declaration of a run or only for
//! the declarations it names.

use super::type_key::{TypeKey, TypeRef};
use serde::Serialize;

/// Declarations an allowance applies to
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InjectionScope {
    /// Every declaration of the run
    Global,
    /// Only declarations bound to one of these identities
    Declarations(Vec<TypeKey>),
}

/// Types supplied as runtime parameters rather than resolved from the graph
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParameterInjection {
    scope: InjectionScope,
    injected: Vec<TypeRef>,
}

impl ParameterInjection {
    /// Allow `injected` for every declaration
    pub fn global(injected: impl IntoIterator<Item = TypeRef>) -> Self {
        Self {
            scope: InjectionScope::Global,
            injected: injected.into_iter().collect(),
        }
    }

    /// Allow `injected` for the declaration producing `Owner`
    pub fn definition<Owner: ?Sized + 'static>(injected: impl IntoIterator<Item = TypeRef>) -> Self {
        Self::for_declarations([TypeKey::of::<Owner>()], injected)
    }

    /// Allow `injected` for the declarations bound to any of `owners`
    pub fn for_declarations(
        owners: impl IntoIterator<Item = TypeKey>,
        injected: impl IntoIterator<Item = TypeRef>,
    ) -> Self {
        Self {
            scope: InjectionScope::Declarations(owners.into_iter().collect()),
            injected: injected.into_iter().collect(),
        }
    }

    /// Which declarations the allowance covers
    pub fn scope(&self) -> &InjectionScope {
        &self.scope
    }

    /// Types the caller supplies
    pub fn injected(&self) -> &[TypeRef] {
        &self.injected
    }
}
