//! Type identity value objects
//!
//! A [`TypeRef`] names a Rust type; a [`TypeKey`] is a type plus an optional
//! [`Qualifier`]. Catalog lookups match keys exactly: an unqualified key never
//! matches a qualified binding and vice versa.

use serde::{Serialize, Serializer};
use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Bare identity of a Rust type
///
/// Equality and hashing use the [`TypeId`] only; the type name is kept for
/// rendering reports.
#[derive(Clone, Copy, Debug)]
pub struct TypeRef {
    id: TypeId,
    name: &'static str,
}

impl TypeRef {
    /// Identity of `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Underlying [`TypeId`]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name as reported by the compiler
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name with module paths stripped, generics kept
    ///
    /// `alloc::vec::Vec<app::Repo>` becomes `Vec<Repo>`.
    pub fn short_name(&self) -> String {
        let mut short = String::with_capacity(self.name.len());
        let mut segment = String::new();
        for ch in self.name.chars() {
            match ch {
                ':' => segment.clear(),
                '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' | ';' => {
                    short.push_str(&segment);
                    segment.clear();
                    short.push(ch);
                }
                _ => segment.push(ch),
            }
        }
        short.push_str(&segment);
        short
    }

    /// Unqualified key for this type
    pub fn key(self) -> TypeKey {
        TypeKey::new(self, None)
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeRef {}

impl Hash for TypeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for TypeRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

/// Name distinguishing several bindings of the same type
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Qualifier(String);

impl Qualifier {
    /// Create a named qualifier
    pub fn named(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The qualifier name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Qualifier {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for Qualifier {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Type identity used for catalog lookups: a type plus an optional qualifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TypeKey {
    #[serde(rename = "type")]
    ty: TypeRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    qualifier: Option<Qualifier>,
}

impl TypeKey {
    /// Create a key from its parts
    pub fn new(ty: TypeRef, qualifier: Option<Qualifier>) -> Self {
        Self { ty, qualifier }
    }

    /// Unqualified key for `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::new(TypeRef::of::<T>(), None)
    }

    /// Qualified key for `T`
    pub fn named<T: ?Sized + 'static>(qualifier: impl Into<Qualifier>) -> Self {
        Self::new(TypeRef::of::<T>(), Some(qualifier.into()))
    }

    /// Same type with the given qualifier
    #[must_use]
    pub fn with_qualifier(mut self, qualifier: impl Into<Qualifier>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    /// The bare type
    pub fn type_ref(&self) -> TypeRef {
        self.ty
    }

    /// The qualifier, if any
    pub fn qualifier(&self) -> Option<&Qualifier> {
        self.qualifier.as_ref()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qualifier {
            Some(qualifier) => write!(f, "{} (qualifier: '{}')", self.ty, qualifier),
            None => write!(f, "{}", self.ty),
        }
    }
}

impl From<TypeRef> for TypeKey {
    fn from(ty: TypeRef) -> Self {
        ty.key()
    }
}
