//! Verification report
//!
//! Accumulates every unsatisfiable dependency found during one run. Entries
//! keep the order in which declarations were checked, so two runs over an
//! unchanged configuration render identically.

use super::type_key::TypeKey;
use crate::error::Result;
use serde::Serialize;
use std::fmt;

/// One dependency of a component that has no binding
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MissingBinding {
    /// Produced identity of the declaration requiring the dependency
    pub component: TypeKey,
    /// Identity that could not be resolved
    pub dependency: TypeKey,
}

impl MissingBinding {
    /// Create a missing binding entry
    pub fn new(component: TypeKey, dependency: TypeKey) -> Self {
        Self {
            component,
            dependency,
        }
    }
}

impl fmt::Display for MissingBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "missing definition '{}' required by '{}'",
            self.dependency, self.component
        )
    }
}

/// Aggregated result of one verification run
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    configuration: String,
    missing: Vec<MissingBinding>,
}

impl VerificationReport {
    /// Empty report for the named configuration
    pub fn new(configuration: impl Into<String>) -> Self {
        Self {
            configuration: configuration.into(),
            missing: Vec::new(),
        }
    }

    /// Record a missing binding
    pub fn push(&mut self, missing: MissingBinding) {
        self.missing.push(missing);
    }

    /// Record several missing bindings, keeping their order
    pub fn extend(&mut self, missing: impl IntoIterator<Item = MissingBinding>) {
        self.missing.extend(missing);
    }

    /// Name of the verified configuration
    pub fn configuration(&self) -> &str {
        &self.configuration
    }

    /// Missing bindings in check order
    pub fn missing(&self) -> &[MissingBinding] {
        &self.missing
    }

    /// Whether the run found nothing missing
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }

    /// Number of missing bindings
    pub fn len(&self) -> usize {
        self.missing.len()
    }

    /// JSON rendering for tooling
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.missing.is_empty() {
            return write!(f, "configuration '{}': all bindings resolved", self.configuration);
        }
        write!(
            f,
            "configuration '{}': {} missing binding(s)",
            self.configuration,
            self.missing.len()
        )?;
        for missing in &self.missing {
            write!(f, "\n  - {missing}")?;
        }
        Ok(())
    }
}
