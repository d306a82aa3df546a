//! Type list macro
//!
//! Builds an array of [`TypeRef`](crate::TypeRef)s from type paths, for extra
//! types, registry entries and parameter injections.
//!
//! # Example
//!
//! ```ignore
//! use bindcheck_domain::types;
//!
//! let extra = types![Clock, dyn EventSink];
//! ```

/// Build `[TypeRef; N]` from a list of types
#[macro_export]
macro_rules! types {
    ($($ty:ty),* $(,)?) => {
        [$($crate::TypeRef::of::<$ty>()),*]
    };
}
