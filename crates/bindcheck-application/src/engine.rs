//! Verification Engine
//!
//! Walks every declaration of a catalog, asks the introspector for its
//! dependencies and runs each through the [`ResolutionPolicy`]. All missing
//! bindings are collected before the run fails, so one call surfaces every
//! problem at once.
//!
//! ## Run lifecycle
//!
//! ```text
//! NotStarted ──run()──► Running ──► Succeeded
//!                                └─► Failed
//! ```
//!
//! Terminal states are final: calling [`Verification::run`] again returns the
//! recorded outcome without re-running.

use crate::catalog::DeclarationCatalog;
use crate::exemptions::{ExemptionRegistry, ExemptionSet};
use crate::injections::InjectionAllowances;
use crate::policy::{Resolution, ResolutionContext, ResolutionPolicy};
use crate::reporters::NullVerificationReporter;
use crate::signatures::CapturedSignatures;
use crate::utils::TimedOperation;
use bindcheck_domain::{
    Configuration, ContainerKind, Declaration, DependencyIntrospector, Error, MissingBinding,
    ParameterInjection, Result, TypeRef, VerificationReport, VerificationReporter,
};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Static verifier for dependency-injection configurations
#[derive(Clone)]
pub struct Verifier {
    policy: ResolutionPolicy,
    introspector: Arc<dyn DependencyIntrospector>,
    reporter: Arc<dyn VerificationReporter>,
    registry: Arc<ExemptionRegistry>,
    parallel: bool,
}

impl Default for Verifier {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Verifier {
    /// Start building a verifier
    pub fn builder() -> VerifierBuilder {
        VerifierBuilder::default()
    }

    /// Verify `configuration`, failing with every missing binding found
    pub fn verify(
        &self,
        configuration: &dyn Configuration,
        extra_types: &[TypeRef],
        injections: &[ParameterInjection],
    ) -> Result<()> {
        self.verification(configuration, extra_types, injections)
            .run()
    }

    /// Prepare a single-use run over `configuration`
    pub fn verification<'a>(
        &'a self,
        configuration: &'a dyn Configuration,
        extra_types: &[TypeRef],
        injections: &[ParameterInjection],
    ) -> Verification<'a> {
        Verification {
            verifier: self,
            configuration,
            extra_types: extra_types.to_vec(),
            injections: InjectionAllowances::new(injections),
            state: VerificationState::NotStarted,
            outcome: None,
        }
    }

    /// Verify each configuration independently, in order
    ///
    /// A failing configuration does not stop the batch; every outcome is kept.
    pub fn verify_all(
        &self,
        configurations: &[&dyn Configuration],
        extra_types: &[TypeRef],
        injections: &[ParameterInjection],
    ) -> BatchReport {
        let outcomes = configurations
            .iter()
            .map(|configuration| BatchOutcome {
                configuration: configuration.name().to_string(),
                result: self.verify(*configuration, extra_types, injections),
            })
            .collect();
        BatchReport { outcomes }
    }

    /// Registry whose snapshot seeds every run's exemption set
    pub fn registry(&self) -> &Arc<ExemptionRegistry> {
        &self.registry
    }

    /// Resolution policy in use
    pub fn policy(&self) -> &ResolutionPolicy {
        &self.policy
    }

    /// Whether declarations are checked on the rayon pool
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    fn execute(
        &self,
        configuration: &dyn Configuration,
        extra_types: &[TypeRef],
        injections: &InjectionAllowances,
    ) -> Result<()> {
        let catalog = DeclarationCatalog::build(configuration);
        let exemptions = ExemptionSet::for_run(&self.registry, extra_types);
        let context = ResolutionContext {
            catalog: &catalog,
            exemptions: &exemptions,
            injections,
        };

        // rayon's indexed collect keeps catalog order
        let checked: Vec<Result<Vec<MissingBinding>>> = if self.parallel {
            catalog
                .declarations()
                .par_iter()
                .map(|declaration| self.check(declaration, &context))
                .collect()
        } else {
            catalog
                .declarations()
                .iter()
                .map(|declaration| self.check(declaration, &context))
                .collect()
        };

        let mut report = VerificationReport::new(configuration.name());
        for missing in checked {
            report.extend(missing?);
        }

        if report.is_empty() {
            Ok(())
        } else {
            Err(Error::missing_bindings(report))
        }
    }

    fn check(
        &self,
        declaration: &Declaration,
        context: &ResolutionContext<'_>,
    ) -> Result<Vec<MissingBinding>> {
        let descriptors = self.introspector.dependencies(declaration)?;
        let mut missing = Vec::new();
        for descriptor in &descriptors {
            match self.policy.resolve(descriptor, context, declaration) {
                Resolution::Satisfied(satisfaction) => {
                    trace!(
                        "{} -> {} satisfied ({:?})",
                        declaration, descriptor, satisfaction
                    );
                }
                Resolution::Missing(dependency) => {
                    debug!("{} -> {} has no binding", declaration, dependency);
                    missing.push(MissingBinding::new(declaration.key().clone(), dependency));
                }
            }
        }
        Ok(missing)
    }
}

/// Builder for [`Verifier`]
#[derive(Default)]
pub struct VerifierBuilder {
    policy: Option<ResolutionPolicy>,
    introspector: Option<Arc<dyn DependencyIntrospector>>,
    reporter: Option<Arc<dyn VerificationReporter>>,
    registry: Option<Arc<ExemptionRegistry>>,
    parallel: bool,
}

impl VerifierBuilder {
    /// Use a custom resolution policy
    #[must_use]
    pub fn policy(mut self, policy: ResolutionPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Unwrap the given container kinds
    #[must_use]
    pub fn containers(self, containers: impl IntoIterator<Item = ContainerKind>) -> Self {
        self.policy(ResolutionPolicy::new(containers))
    }

    /// Describe components with `introspector`
    #[must_use]
    pub fn introspector(mut self, introspector: Arc<dyn DependencyIntrospector>) -> Self {
        self.introspector = Some(introspector);
        self
    }

    /// Send progress notifications to `reporter`
    #[must_use]
    pub fn reporter(mut self, reporter: Arc<dyn VerificationReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Seed runs from `registry` instead of the process-wide one
    #[must_use]
    pub fn registry(mut self, registry: Arc<ExemptionRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Check declarations in parallel
    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Build the verifier
    pub fn build(self) -> Verifier {
        Verifier {
            policy: self.policy.unwrap_or_default(),
            introspector: self
                .introspector
                .unwrap_or_else(|| Arc::new(CapturedSignatures)),
            reporter: self
                .reporter
                .unwrap_or_else(|| Arc::new(NullVerificationReporter)),
            registry: self.registry.unwrap_or_else(ExemptionRegistry::global),
            parallel: self.parallel,
        }
    }
}

/// Lifecycle state of a [`Verification`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationState {
    /// Prepared, not run yet
    NotStarted,
    /// Pass in progress
    Running,
    /// Every dependency resolved
    Succeeded,
    /// Missing bindings or an introspection failure
    Failed,
}

impl VerificationState {
    /// Whether the run has finished
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// Single-use verification run over one configuration
pub struct Verification<'a> {
    verifier: &'a Verifier,
    configuration: &'a dyn Configuration,
    extra_types: Vec<TypeRef>,
    injections: InjectionAllowances,
    state: VerificationState,
    outcome: Option<Result<()>>,
}

impl Verification<'_> {
    /// Run the pass, or return the recorded outcome of a finished run
    pub fn run(&mut self) -> Result<()> {
        if let Some(outcome) = &self.outcome {
            return outcome.clone();
        }

        let name = self.configuration.name();
        self.state = VerificationState::Running;
        self.verifier.reporter.started(name);
        let timer = TimedOperation::start();

        let outcome = self
            .verifier
            .execute(self.configuration, &self.extra_types, &self.injections);
        let elapsed = timer.elapsed();
        debug!(
            "Verification of '{}' finished in {} ms",
            name,
            timer.elapsed_ms()
        );

        match &outcome {
            Ok(()) => {
                self.state = VerificationState::Succeeded;
                self.verifier.reporter.succeeded(name, elapsed);
            }
            Err(Error::MissingBindings { report }) => {
                self.state = VerificationState::Failed;
                self.verifier.reporter.failed(report, elapsed);
            }
            Err(error) => {
                self.state = VerificationState::Failed;
                warn!("Verification of '{}' aborted: {}", name, error);
            }
        }

        self.outcome = Some(outcome.clone());
        outcome
    }

    /// Current lifecycle state
    pub fn state(&self) -> VerificationState {
        self.state
    }

    /// Report of a failed run with missing bindings
    pub fn report(&self) -> Option<&VerificationReport> {
        match &self.outcome {
            Some(Err(error)) => error.report(),
            _ => None,
        }
    }
}

/// Outcome of one configuration in a batch
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Name of the configuration
    pub configuration: String,
    /// Its verification result
    pub result: Result<()>,
}

/// Per-configuration outcomes of [`Verifier::verify_all`], in input order
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    outcomes: Vec<BatchOutcome>,
}

impl BatchReport {
    /// Every outcome, in input order
    pub fn outcomes(&self) -> &[BatchOutcome] {
        &self.outcomes
    }

    /// Whether every configuration passed
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.result.is_ok())
    }

    /// Names of the configurations that passed
    pub fn passed(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.result.is_ok())
            .map(|outcome| outcome.configuration.as_str())
    }

    /// Outcomes of the configurations that failed
    pub fn failures(&self) -> impl Iterator<Item = &BatchOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.result.is_err())
    }

    /// Collapse into one result, aggregating every failure
    pub fn into_result(self) -> Result<()> {
        let total = self.outcomes.len();
        let failures: Vec<Error> = self
            .outcomes
            .into_iter()
            .filter_map(|outcome| outcome.result.err())
            .collect();
        if failures.is_empty() {
            Ok(())
        } else {
            Err(Error::Batch { total, failures })
        }
    }
}
