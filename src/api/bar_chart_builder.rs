use crate::core::{ChartDefinition, ChartKind, RenderOptions};
use crate::error::{ChartError, ChartResult};
use crate::host::Surface;
use crate::render::{BarRenderData, BarSeriesRender, RenderPayload, RenderRequest};

use super::BarStylePolicy;
use super::chart_type_builder::{ChartTypeBuilder, ensure_kind};

/// Builds categorical bar charts: one flat-colored series, zero-based y axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarChartBuilder {
    policy: BarStylePolicy,
}

impl BarChartBuilder {
    #[must_use]
    pub fn new(policy: BarStylePolicy) -> Self {
        Self { policy }
    }
}

fn resolve_bar_options(options: &RenderOptions) -> RenderOptions {
    let mut resolved = options.clone();
    resolved.y_axis.begin_at_zero = true;
    resolved.y_axis.min = Some(0.0);
    resolved.legend_visible = false;
    resolved.tooltip.enabled = true;
    resolved
}

impl ChartTypeBuilder for BarChartBuilder {
    fn kind(&self) -> ChartKind {
        ChartKind::Bar
    }

    fn build_request(
        &self,
        definition: &ChartDefinition,
        _surface: &Surface,
    ) -> ChartResult<RenderRequest> {
        ensure_kind(definition, ChartKind::Bar)?;
        let dataset = definition.categorical().ok_or_else(|| {
            ChartError::InvalidData(format!(
                "bar definition `{}` needs a categorical dataset",
                definition.id
            ))
        })?;
        if dataset.series.len() != 1 {
            return Err(ChartError::InvalidData(format!(
                "bar definition `{}` must declare exactly one series, found {}",
                definition.id,
                dataset.series.len()
            )));
        }
        let options = resolve_bar_options(&definition.options);
        if let Some(max) = options.y_axis.max {
            if max <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "bar definition `{}` y axis max must be above the zero baseline",
                    definition.id
                )));
            }
        }

        let series = dataset
            .series
            .iter()
            .map(|series| BarSeriesRender {
                name: series.name.clone(),
                values: series.values.clone(),
                fill: series.style.color,
                corner_radius_px: self.policy.corner_radius_px,
            })
            .collect();

        Ok(RenderRequest {
            definition_id: definition.id.clone(),
            kind: ChartKind::Bar,
            payload: RenderPayload::Bar(BarRenderData {
                labels: dataset.labels.clone(),
                series,
            }),
            options,
        })
    }
}
