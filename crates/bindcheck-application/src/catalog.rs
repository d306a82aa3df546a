//! Declaration Catalog
//!
//! Flattens a root configuration and everything it transitively includes into
//! one ordered, queryable index of effective declarations.
//!
//! ## Ordering
//!
//! ```text
//! root ── declarations (in order)
//!   ├── include A ── declarations
//!   │     └── include C ── declarations
//!   └── include B ── declarations
//!         └── include C        (already visited, skipped)
//! ```
//!
//! A declaration for an identity that is already indexed replaces the earlier
//! one in its original slot, so iteration order stays stable. Secondary types
//! are indexed too, but never over another declaration's primary key: every
//! effective declaration stays reachable through its own key.

use bindcheck_domain::{Configuration, Declaration, TypeKey};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Flattened index of the effective declarations of one verification run
#[derive(Debug, Default, Clone)]
pub struct DeclarationCatalog {
    declarations: Vec<Declaration>,
    index: HashMap<TypeKey, usize>,
    configurations: Vec<String>,
}

impl DeclarationCatalog {
    /// Build the catalog for `root` and its transitive includes
    pub fn build(root: &dyn Configuration) -> Self {
        let mut catalog = Self::default();
        let mut visited = HashSet::new();
        catalog.visit(root, &mut visited);
        debug!(
            configurations = catalog.configurations.len(),
            declarations = catalog.declarations.len(),
            "Built declaration catalog for '{}'",
            root.name()
        );
        catalog
    }

    fn visit(&mut self, configuration: &dyn Configuration, visited: &mut HashSet<*const ()>) {
        let identity = std::ptr::from_ref(configuration).cast::<()>();
        if !visited.insert(identity) {
            return;
        }
        self.configurations.push(configuration.name().to_string());

        for declaration in configuration.declarations() {
            self.insert(declaration.clone());
        }
        for include in configuration.includes() {
            self.visit(include, visited);
        }
    }

    fn insert(&mut self, declaration: Declaration) {
        let overridden = self
            .index
            .get(declaration.key())
            .copied()
            .filter(|&slot| self.declarations[slot].key() == declaration.key());
        match overridden {
            Some(slot) => {
                debug!(
                    "Declaration {} overrides {}",
                    declaration, self.declarations[slot]
                );
                let previous = std::mem::replace(&mut self.declarations[slot], declaration);
                for key in previous.bound_keys() {
                    if self.index.get(key) == Some(&slot) {
                        self.index.remove(key);
                    }
                }
                self.index_keys(slot);
            }
            None => {
                self.declarations.push(declaration);
                self.index_keys(self.declarations.len() - 1);
            }
        }
    }

    // A primary key always points at its own declaration; secondary keys never
    // shadow another declaration's primary key.
    fn index_keys(&mut self, slot: usize) {
        let declaration = &self.declarations[slot];
        self.index.insert(declaration.key().clone(), slot);
        for key in declaration.secondary_types() {
            let owned_elsewhere = self
                .index
                .get(key)
                .is_some_and(|&other| other != slot && self.declarations[other].key() == key);
            if owned_elsewhere {
                debug!(
                    "Secondary binding {} of {} ignored: primary key of another declaration",
                    key, declaration
                );
                continue;
            }
            self.index.insert(key.clone(), slot);
        }
    }

    /// Declaration bound to exactly `key` (type and qualifier)
    pub fn resolve(&self, key: &TypeKey) -> Option<&Declaration> {
        self.index.get(key).map(|&slot| &self.declarations[slot])
    }

    /// Effective declarations in deterministic visit order
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Names of the visited configurations, in visit order
    pub fn configurations(&self) -> &[String] {
        &self.configurations
    }

    /// Number of effective declarations
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether the catalog holds no declaration
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}
