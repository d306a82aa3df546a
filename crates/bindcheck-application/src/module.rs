//! In-memory configuration
//!
//! [`Module`] is the builder-style [`Configuration`] used to describe
//! components for verification:
//!
//! ```ignore
//! use bindcheck_application::Module;
//! use bindcheck_domain::DependencyDescriptor;
//!
//! let data = Module::new("data")
//!     .single::<PgPool>([])
//!     .single::<PgUserRepository>([DependencyDescriptor::of::<PgPool>()])
//!     .bind::<dyn UserRepository>();
//!
//! let app = Module::new("app")
//!     .factory::<UserService>([DependencyDescriptor::of::<dyn UserRepository>()])
//!     .include(data);
//! ```

use bindcheck_domain::{
    Configuration, Declaration, DependencyDescriptor, Qualifier, Scope, TypeKey,
};
use std::sync::Arc;
use tracing::warn;

/// Named set of declarations plus included modules
#[derive(Debug, Clone, Default)]
pub struct Module {
    name: String,
    declarations: Vec<Declaration>,
    includes: Vec<Arc<Module>>,
}

impl Module {
    /// Create an empty module
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Declare a singleton producing `T`
    #[must_use]
    pub fn single<T: ?Sized + 'static>(
        self,
        dependencies: impl IntoIterator<Item = DependencyDescriptor>,
    ) -> Self {
        self.declare(Declaration::single::<T>().with_dependencies(dependencies))
    }

    /// Declare a factory producing `T`
    #[must_use]
    pub fn factory<T: ?Sized + 'static>(
        self,
        dependencies: impl IntoIterator<Item = DependencyDescriptor>,
    ) -> Self {
        self.declare(Declaration::factory::<T>().with_dependencies(dependencies))
    }

    /// Declare `T` living in the named scope
    #[must_use]
    pub fn scoped<T: ?Sized + 'static>(
        self,
        scope: impl Into<String>,
        dependencies: impl IntoIterator<Item = DependencyDescriptor>,
    ) -> Self {
        self.declare(
            Declaration::new(TypeKey::of::<T>(), Scope::Scoped(scope.into()))
                .with_dependencies(dependencies),
        )
    }

    /// Add a prepared declaration
    #[must_use]
    pub fn declare(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Qualify the most recent declaration
    #[must_use]
    pub fn named(self, qualifier: impl Into<Qualifier>) -> Self {
        self.map_last("named", |declaration| declaration.with_qualifier(qualifier))
    }

    /// Also bind the most recent declaration to `S`
    #[must_use]
    pub fn bind<S: ?Sized + 'static>(self) -> Self {
        self.map_last("bind", |declaration| declaration.bind(TypeKey::of::<S>()))
    }

    /// Include another module
    #[must_use]
    pub fn include(mut self, module: impl Into<Arc<Module>>) -> Self {
        self.includes.push(module.into());
        self
    }

    fn map_last(mut self, operation: &str, f: impl FnOnce(Declaration) -> Declaration) -> Self {
        match self.declarations.pop() {
            Some(last) => self.declarations.push(f(last)),
            None => warn!(
                "Module '{}': '{}' called before any declaration, ignored",
                self.name, operation
            ),
        }
        self
    }
}

impl Configuration for Module {
    fn name(&self) -> &str {
        &self.name
    }

    fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    fn includes(&self) -> Vec<&dyn Configuration> {
        self.includes
            .iter()
            .map(|module| module.as_ref() as &dyn Configuration)
            .collect()
    }
}
