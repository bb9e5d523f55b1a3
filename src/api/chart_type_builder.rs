use tracing::debug;

use crate::core::{ChartDefinition, ChartKind};
use crate::error::{ChartError, ChartResult};
use crate::host::Surface;
use crate::render::{EngineExtension, RenderEngine, RenderRequest};

use super::{BarChartBuilder, BuilderPolicies, LineChartBuilder, MatrixChartBuilder};

/// Maps a chart definition of one kind to a fully resolved engine request.
///
/// Builders are pure: they read the definition and the surface geometry and
/// never touch engine or registry state.
pub trait ChartTypeBuilder {
    fn kind(&self) -> ChartKind;

    /// Engine capability this kind cannot render without.
    fn required_extension(&self) -> Option<EngineExtension> {
        None
    }

    fn build_request(
        &self,
        definition: &ChartDefinition,
        surface: &Surface,
    ) -> ChartResult<RenderRequest>;
}

pub(super) fn ensure_kind(definition: &ChartDefinition, expected: ChartKind) -> ChartResult<()> {
    if definition.kind != expected {
        return Err(ChartError::KindMismatch {
            definition_id: definition.id.clone(),
            expected,
            actual: definition.kind,
        });
    }
    Ok(())
}

/// One builder per chart kind, dispatched by `ChartDefinition::kind`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChartBuilderSet {
    bar: BarChartBuilder,
    line: LineChartBuilder,
    matrix: MatrixChartBuilder,
}

impl ChartBuilderSet {
    #[must_use]
    pub fn new(policies: BuilderPolicies) -> Self {
        Self {
            bar: BarChartBuilder::new(policies.bar),
            line: LineChartBuilder::new(policies.line),
            matrix: MatrixChartBuilder::new(policies.matrix),
        }
    }

    #[must_use]
    pub fn builder_for(&self, kind: ChartKind) -> &dyn ChartTypeBuilder {
        match kind {
            ChartKind::Bar => &self.bar,
            ChartKind::Line => &self.line,
            ChartKind::Matrix => &self.matrix,
        }
    }

    /// Builds the request for `definition` and asks `engine` for a new instance.
    pub fn build_instance<E: RenderEngine>(
        &self,
        engine: &mut E,
        definition: &ChartDefinition,
        surface: &Surface,
    ) -> ChartResult<E::Handle> {
        let builder = self.builder_for(definition.kind);
        if let Some(extension) = builder.required_extension() {
            if !engine.has_extension(extension) {
                return Err(ChartError::MissingEngineExtension {
                    definition_id: definition.id.clone(),
                    extension: extension.name().to_owned(),
                });
            }
        }

        let request = builder.build_request(definition, surface)?;
        debug!(
            definition_id = %definition.id,
            surface_id = %surface.id(),
            kind = ?definition.kind,
            "creating chart instance"
        );
        engine.create_instance(surface, request)
    }
}
