//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the verification core.
//!
//! ## Module Categories
//!
//! ### Configuration & Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based verifier settings (TOML + env) |
//! | [`bootstrap`] | Builds a `Verifier` from settings |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`reporters`] | Console and tracing progress reporters |
//!
//! ### Errors
//! | Module | Description |
//! |--------|-------------|
//! | [`error_ext`] | Context helpers converting foreign errors |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod reporters;

// Re-export commonly used types
pub use bootstrap::{build_verifier, build_verifier_with_registry, load_verifier};
pub use config::{ConfigLoader, VerifierConfig};
pub use error_ext::ErrorContext;
pub use reporters::{ConsoleReporter, TracingReporter};
