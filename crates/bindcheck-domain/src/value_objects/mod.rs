//! Value objects shared by every layer

pub mod declaration;
pub mod descriptor;
pub mod injection;
pub mod report;
pub mod type_key;

pub use declaration::{Declaration, Scope};
pub use descriptor::{ContainerKind, DependencyDescriptor, RequiredType};
pub use injection::{InjectionScope, ParameterInjection};
pub use report::{MissingBinding, VerificationReport};
pub use type_key::{Qualifier, TypeKey, TypeRef};
