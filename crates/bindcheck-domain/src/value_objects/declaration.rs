//! Factory declarations

use super::descriptor::DependencyDescriptor;
use super::type_key::{Qualifier, TypeKey};
use serde::Serialize;
use std::fmt;

/// Lifecycle tag of a declaration
///
/// Carried through verification for reporting; it does not influence whether a
/// dependency is satisfiable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// One shared instance
    #[default]
    Singleton,
    /// A new instance per request
    Factory,
    /// One instance per named scope
    Scoped(String),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Singleton => f.write_str("singleton"),
            Self::Factory => f.write_str("factory"),
            Self::Scoped(name) => write!(f, "scoped({name})"),
        }
    }
}

/// A binding from a produced type to the factory constructing it
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Declaration {
    key: TypeKey,
    scope: Scope,
    dependencies: Vec<DependencyDescriptor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    secondary_types: Vec<TypeKey>,
}

impl Declaration {
    /// Declaration producing `key` with no captured dependencies
    pub fn new(key: TypeKey, scope: Scope) -> Self {
        Self {
            key,
            scope,
            dependencies: Vec::new(),
            secondary_types: Vec::new(),
        }
    }

    /// Singleton declaration producing `T`
    pub fn single<T: ?Sized + 'static>() -> Self {
        Self::new(TypeKey::of::<T>(), Scope::Singleton)
    }

    /// Factory declaration producing `T`
    pub fn factory<T: ?Sized + 'static>() -> Self {
        Self::new(TypeKey::of::<T>(), Scope::Factory)
    }

    /// Replace the captured dependency list
    #[must_use]
    pub fn with_dependencies(
        mut self,
        dependencies: impl IntoIterator<Item = DependencyDescriptor>,
    ) -> Self {
        self.dependencies = dependencies.into_iter().collect();
        self
    }

    /// Append one captured dependency
    #[must_use]
    pub fn with_dependency(mut self, dependency: DependencyDescriptor) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// Qualify the produced type
    #[must_use]
    pub fn with_qualifier(mut self, qualifier: impl Into<Qualifier>) -> Self {
        self.key = self.key.with_qualifier(qualifier);
        self
    }

    /// Also bind this declaration to `key`
    #[must_use]
    pub fn bind(mut self, key: TypeKey) -> Self {
        if key != self.key && !self.secondary_types.contains(&key) {
            self.secondary_types.push(key);
        }
        self
    }

    /// Produced type identity
    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    /// Lifecycle tag
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Dependencies captured at registration time, in factory order
    pub fn dependencies(&self) -> &[DependencyDescriptor] {
        &self.dependencies
    }

    /// Additional identities this declaration satisfies
    pub fn secondary_types(&self) -> &[TypeKey] {
        &self.secondary_types
    }

    /// Produced identity followed by the secondary ones
    pub fn bound_keys(&self) -> impl Iterator<Item = &TypeKey> {
        std::iter::once(&self.key).chain(self.secondary_types.iter())
    }

    /// Whether any bound identity equals `key`
    pub fn binds(&self, key: &TypeKey) -> bool {
        self.bound_keys().any(|bound| bound == key)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.scope, self.key)
    }
}
