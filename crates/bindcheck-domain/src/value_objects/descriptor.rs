//! Dependency descriptors
//!
//! One required input of a declaration's factory: what type it asks for, under
//! which qualifier, whether it may be absent, and whether it is wrapped in a
//! generic container such as a lazy handle or a list.

use super::type_key::{Qualifier, TypeKey, TypeRef};
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Kind of generic container wrapping a dependency
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    /// Deferred handle resolved on first use
    Lazy,
    /// All bindings of the element type
    List,
    /// Any other wrapper, identified by name
    Other(String),
}

impl ContainerKind {
    /// Parse a container kind from its configuration name
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "lazy" => Self::Lazy,
            "list" => Self::List,
            _ => Self::Other(name.to_string()),
        }
    }

    /// Configuration name of this kind
    pub fn name(&self) -> &str {
        match self {
            Self::Lazy => "lazy",
            Self::List => "list",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape of a required type
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredType {
    /// A plain type
    Concrete(TypeRef),
    /// A generic container whose effective requirement is its element
    Container {
        /// Kind of wrapper
        kind: ContainerKind,
        /// Identity of the container type itself
        container: TypeRef,
        /// Wrapped requirement
        element: Box<RequiredType>,
    },
}

impl RequiredType {
    /// Innermost concrete type
    pub fn target(&self) -> TypeRef {
        match self {
            Self::Concrete(ty) => *ty,
            Self::Container { element, .. } => element.target(),
        }
    }

    /// Identity of this layer: the container for wrappers, the type otherwise
    pub fn outer(&self) -> TypeRef {
        match self {
            Self::Concrete(ty) => *ty,
            Self::Container { container, .. } => *container,
        }
    }
}

/// One required input of a declaration
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DependencyDescriptor {
    required: RequiredType,
    #[serde(skip_serializing_if = "Option::is_none")]
    qualifier: Option<Qualifier>,
    optional: bool,
}

impl DependencyDescriptor {
    /// Create a descriptor from its parts
    pub fn new(required: RequiredType, qualifier: Option<Qualifier>, optional: bool) -> Self {
        Self {
            required,
            qualifier,
            optional,
        }
    }

    /// Required dependency on `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::new(RequiredType::Concrete(TypeRef::of::<T>()), None, false)
    }

    /// Required dependency on `T` bound under `qualifier`
    pub fn named<T: ?Sized + 'static>(qualifier: impl Into<Qualifier>) -> Self {
        Self::of::<T>().with_qualifier(qualifier)
    }

    /// Nullable dependency on `T`
    pub fn optional<T: ?Sized + 'static>() -> Self {
        Self::of::<T>().as_optional()
    }

    /// Lazily resolved dependency on `T`
    pub fn lazy<T: 'static>() -> Self {
        Self::wrapped(
            ContainerKind::Lazy,
            TypeRef::of::<LazyLock<T>>(),
            RequiredType::Concrete(TypeRef::of::<T>()),
        )
    }

    /// Dependency on every binding of `T`
    pub fn list<T: 'static>() -> Self {
        Self::wrapped(
            ContainerKind::List,
            TypeRef::of::<Vec<T>>(),
            RequiredType::Concrete(TypeRef::of::<T>()),
        )
    }

    /// Dependency on `element` wrapped in a container of the given kind
    pub fn wrapped(kind: ContainerKind, container: TypeRef, element: RequiredType) -> Self {
        Self::new(
            RequiredType::Container {
                kind,
                container,
                element: Box::new(element),
            },
            None,
            false,
        )
    }

    /// Same requirement, looked up under `qualifier`
    #[must_use]
    pub fn with_qualifier(mut self, qualifier: impl Into<Qualifier>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    /// Same requirement, marked nullable
    #[must_use]
    pub fn as_optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Shape of the requirement
    pub fn required(&self) -> &RequiredType {
        &self.required
    }

    /// Qualifier applied to lookups
    pub fn qualifier(&self) -> Option<&Qualifier> {
        self.qualifier.as_ref()
    }

    /// Whether the dependency may be absent
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Innermost required type
    pub fn target(&self) -> TypeRef {
        self.required.target()
    }

    /// Lookup key for the innermost type
    pub fn target_key(&self) -> TypeKey {
        TypeKey::new(self.target(), self.qualifier.clone())
    }
}

impl fmt::Display for DependencyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TypeKey::new(self.required.outer(), self.qualifier.clone()))?;
        if self.optional {
            f.write_str(" (optional)")?;
        }
        Ok(())
    }
}
