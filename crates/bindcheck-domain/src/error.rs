//! Error handling types

use crate::value_objects::VerificationReport;
use std::sync::Arc;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for bindcheck
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// One or more required dependencies have no binding
    ///
    /// Raised once per verification call and carries every missing binding
    /// found during the full pass.
    #[error("{report}")]
    MissingBindings {
        /// The complete report of the failed run
        report: VerificationReport,
    },

    /// The introspection collaborator could not describe a component
    #[error("Introspection error for '{component}': {message}")]
    Introspection {
        /// Type name of the component being introspected
        component: String,
        /// Description of the failure
        message: String,
    },

    /// Verifier settings could not be loaded or are invalid
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Arc<dyn std::error::Error + Send + Sync>>,
    },

    /// A report could not be rendered as JSON
    #[error("JSON serialization error: {source}")]
    Json {
        /// The underlying JSON error
        #[source]
        source: Arc<serde_json::Error>,
    },

    /// At least one configuration of a batch failed verification
    #[error(
        "{} of {total} configuration(s) failed verification:\n{}",
        failure_count(.failures),
        render_failures(.failures)
    )]
    Batch {
        /// Number of configurations verified
        total: usize,
        /// Failures in batch order
        failures: Vec<Error>,
    },
}

impl Error {
    /// Create a missing bindings error from a non-empty report
    pub fn missing_bindings(report: VerificationReport) -> Self {
        Self::MissingBindings { report }
    }

    /// Create an introspection error
    pub fn introspection<C: Into<String>, M: Into<String>>(component: C, message: M) -> Self {
        Self::Introspection {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Arc::new(source)),
        }
    }

    /// The verification report, if this is a missing bindings error
    pub fn report(&self) -> Option<&VerificationReport> {
        match self {
            Self::MissingBindings { report } => Some(report),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source: Arc::new(source),
        }
    }
}

fn failure_count(failures: &[Error]) -> usize {
    failures.len()
}

fn render_failures(failures: &[Error]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
