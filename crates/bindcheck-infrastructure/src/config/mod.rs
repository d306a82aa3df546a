//! Verifier configuration
//!
//! Settings are merged from defaults, a TOML file and `BINDCHECK_`-prefixed
//! environment variables by [`loader::ConfigLoader`].

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{IntrospectionKind, LoggingConfig, ReporterKind, VerifierConfig};
