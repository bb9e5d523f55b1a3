use tracing::{debug, info, warn};

use crate::core::DefinitionCatalog;
use crate::error::{ChartError, ChartResult};
use crate::host::SurfaceResolver;
use crate::render::RenderEngine;

use super::{
    ChartBuilderSet, DashboardConfig, InstanceRegistry, InstanceState, Registration,
    RegistrationOutcome,
};

/// Error attributed to one catalog entry during a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionFailure {
    pub definition_id: String,
    pub error: ChartError,
}

/// Outcome of one full catalog render pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderPassReport {
    /// 1-based sequence number of the pass.
    pub pass: u64,
    pub rendered: Vec<String>,
    /// Definitions whose target surface was absent.
    pub skipped: Vec<String>,
    pub failures: Vec<DefinitionFailure>,
    pub disposal_failures: Vec<DefinitionFailure>,
}

impl RenderPassReport {
    fn new(pass: u64) -> Self {
        Self {
            pass,
            ..Self::default()
        }
    }

    fn record(&mut self, definition_id: &str, registration: Registration) {
        if let Some(error) = registration.disposal_error {
            self.disposal_failures.push(DefinitionFailure {
                definition_id: definition_id.to_owned(),
                error,
            });
        }
        match registration.outcome {
            RegistrationOutcome::Created => self.rendered.push(definition_id.to_owned()),
            RegistrationOutcome::Skipped => self.skipped.push(definition_id.to_owned()),
            RegistrationOutcome::Failed(error) => {
                warn!(
                    definition_id,
                    pass = self.pass,
                    error = %error,
                    "chart build failed; continuing render pass"
                );
                self.failures.push(DefinitionFailure {
                    definition_id: definition_id.to_owned(),
                    error,
                });
            }
        }
    }

    /// `true` when nothing failed to build or dispose.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.disposal_failures.is_empty()
    }

    #[must_use]
    pub fn failure_for(&self, definition_id: &str) -> Option<&ChartError> {
        self.failures
            .iter()
            .find(|failure| failure.definition_id == definition_id)
            .map(|failure| &failure.error)
    }
}

/// Binds a definition catalog to surfaces and a rendering engine.
///
/// `initialize_all_charts` is the single re-entrant entry point: every call
/// replaces the instance of each definition, it never adds a second one.
pub struct ChartDashboard<E: RenderEngine, S: SurfaceResolver> {
    catalog: DefinitionCatalog,
    builders: ChartBuilderSet,
    registry: InstanceRegistry<E::Handle>,
    engine: E,
    surfaces: S,
    passes_completed: u64,
}

impl<E: RenderEngine, S: SurfaceResolver> ChartDashboard<E, S> {
    pub fn new(config: DashboardConfig, engine: E, surfaces: S) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            builders: ChartBuilderSet::new(config.policies),
            catalog: config.catalog,
            registry: InstanceRegistry::new(),
            engine,
            surfaces,
            passes_completed: 0,
        })
    }

    /// Creates a dashboard using default builder policies.
    #[must_use]
    pub fn with_catalog(catalog: DefinitionCatalog, engine: E, surfaces: S) -> Self {
        Self {
            catalog,
            builders: ChartBuilderSet::default(),
            registry: InstanceRegistry::new(),
            engine,
            surfaces,
            passes_completed: 0,
        }
    }

    /// Runs one full render pass over the catalog, in catalog order.
    ///
    /// Failures stay local to their definition and are returned in the report.
    pub fn initialize_all_charts(&mut self) -> RenderPassReport {
        self.passes_completed += 1;
        let mut report = RenderPassReport::new(self.passes_completed);
        debug!(pass = report.pass, charts = self.catalog.len(), "starting render pass");

        let Self {
            catalog,
            builders,
            registry,
            engine,
            surfaces,
            ..
        } = self;

        for definition in catalog.iter() {
            let registration = registry.register_or_replace(&definition.id, || {
                let Some(surface) = surfaces.lookup_surface(&definition.surface_id) else {
                    return Ok(None);
                };
                builders
                    .build_instance(engine, definition, &surface)
                    .map(Some)
            });
            report.record(&definition.id, registration);
        }

        info!(
            pass = report.pass,
            rendered = report.rendered.len(),
            skipped = report.skipped.len(),
            failed = report.failures.len(),
            "render pass finished"
        );
        report
    }

    /// Disposes every live instance; returns disposal errors.
    pub fn dispose_all(&mut self) -> Vec<ChartError> {
        self.registry.dispose_all()
    }

    #[must_use]
    pub fn instance_state(&self, definition_id: &str) -> InstanceState {
        self.registry.state(definition_id)
    }

    #[must_use]
    pub fn instance(&self, definition_id: &str) -> Option<&E::Handle> {
        self.registry.get(definition_id)
    }

    #[must_use]
    pub fn live_instance_count(&self) -> usize {
        self.registry.live_count()
    }

    #[must_use]
    pub fn render_pass_count(&self) -> u64 {
        self.passes_completed
    }

    #[must_use]
    pub fn registry(&self) -> &InstanceRegistry<E::Handle> {
        &self.registry
    }

    #[must_use]
    pub fn catalog(&self) -> &DefinitionCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    #[must_use]
    pub fn surfaces(&self) -> &S {
        &self.surfaces
    }

    pub fn surfaces_mut(&mut self) -> &mut S {
        &mut self.surfaces
    }
}
