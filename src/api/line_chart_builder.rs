use crate::core::{ChartDefinition, ChartKind, RenderOptions, TooltipMode};
use crate::error::{ChartError, ChartResult};
use crate::host::Surface;
use crate::render::{LineRenderData, LineSeriesRender, RenderPayload, RenderRequest};

use super::LineStylePolicy;
use super::chart_type_builder::{ChartTypeBuilder, ensure_kind};

pub const PERCENT_AXIS_MIN: f64 = 0.0;
pub const PERCENT_AXIS_MAX: f64 = 100.0;

/// Builds percentage trend charts with smoothed, filled curves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineChartBuilder {
    policy: LineStylePolicy,
}

impl LineChartBuilder {
    #[must_use]
    pub fn new(policy: LineStylePolicy) -> Self {
        Self { policy }
    }
}

fn resolve_line_options(options: &RenderOptions) -> RenderOptions {
    let mut resolved = options.clone();
    resolved.y_axis.begin_at_zero = true;
    resolved.y_axis.min = Some(PERCENT_AXIS_MIN);
    resolved.y_axis.max = Some(PERCENT_AXIS_MAX);
    // Hovering one week reports every series for that week.
    resolved.tooltip.mode = TooltipMode::Index;
    resolved.tooltip.intersect = false;
    resolved
}

impl ChartTypeBuilder for LineChartBuilder {
    fn kind(&self) -> ChartKind {
        ChartKind::Line
    }

    fn build_request(
        &self,
        definition: &ChartDefinition,
        _surface: &Surface,
    ) -> ChartResult<RenderRequest> {
        ensure_kind(definition, ChartKind::Line)?;
        let dataset = definition.categorical().ok_or_else(|| {
            ChartError::InvalidData(format!(
                "line definition `{}` needs a categorical dataset",
                definition.id
            ))
        })?;

        let series = dataset
            .series
            .iter()
            .map(|series| LineSeriesRender {
                name: series.name.clone(),
                values: series.values.clone(),
                stroke: series.style.color,
                area_fill: series.style.color.with_alpha(self.policy.fill_alpha),
                filled: self.policy.filled,
                tension: self.policy.tension,
            })
            .collect();

        Ok(RenderRequest {
            definition_id: definition.id.clone(),
            kind: ChartKind::Line,
            payload: RenderPayload::Line(LineRenderData {
                labels: dataset.labels.clone(),
                series,
            }),
            options: resolve_line_options(&definition.options),
        })
    }
}
