//! Configuration types

use crate::constants::{DEFAULT_CONTAINERS, DEFAULT_LOG_LEVEL};
use bindcheck_domain::ContainerKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where verification progress is reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReporterKind {
    /// Plain lines on stdout
    #[default]
    Console,
    /// `tracing` events
    Tracing,
    /// Nothing
    Silent,
}

/// How component dependencies are described
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntrospectionKind {
    /// Descriptors captured on each declaration
    #[default]
    Captured,
    /// Linked signature registry, falling back to captured descriptors
    Linked,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily rolling file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Verifier configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Check declarations on the rayon pool
    pub parallel: bool,

    /// Progress reporter
    pub reporter: ReporterKind,

    /// Dependency introspection strategy
    pub introspection: IntrospectionKind,

    /// Container kinds unwrapped to their element type
    pub containers: Vec<String>,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            reporter: ReporterKind::default(),
            introspection: IntrospectionKind::default(),
            containers: DEFAULT_CONTAINERS.iter().map(ToString::to_string).collect(),
            logging: LoggingConfig::default(),
        }
    }
}

impl VerifierConfig {
    /// Recognized container kinds
    pub fn container_kinds(&self) -> Vec<ContainerKind> {
        self.containers
            .iter()
            .map(|name| ContainerKind::from_name(name))
            .collect()
    }
}
