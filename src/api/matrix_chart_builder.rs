use crate::core::{AxisScaleKind, ChartDefinition, ChartKind, RenderOptions};
use crate::error::{ChartError, ChartResult};
use crate::host::Surface;
use crate::render::{
    EngineExtension, MatrixCellRender, MatrixRenderData, RenderPayload, RenderRequest,
};

use super::chart_type_builder::{ChartTypeBuilder, ensure_kind};
use super::{
    MatrixCellSizeContext, MatrixCellStyleContext, MatrixStylePolicy, format_matrix_tooltip,
    resolve_matrix_cell_fill, resolve_matrix_cell_opacity, resolve_matrix_cell_size,
};

/// Builds two-axis categorical value grids.
///
/// Cell geometry is derived from the surface plotting area each time a request
/// is built, so a resize-driven pass picks up the new surface size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MatrixChartBuilder {
    policy: MatrixStylePolicy,
}

impl MatrixChartBuilder {
    #[must_use]
    pub fn new(policy: MatrixStylePolicy) -> Self {
        Self { policy }
    }
}

fn resolve_matrix_options(options: &RenderOptions) -> RenderOptions {
    let mut resolved = options.clone();
    resolved.x_axis.scale = AxisScaleKind::Category;
    resolved.y_axis.scale = AxisScaleKind::Category;
    resolved.legend_visible = false;
    resolved
}

impl ChartTypeBuilder for MatrixChartBuilder {
    fn kind(&self) -> ChartKind {
        ChartKind::Matrix
    }

    fn required_extension(&self) -> Option<EngineExtension> {
        Some(EngineExtension::Matrix)
    }

    fn build_request(
        &self,
        definition: &ChartDefinition,
        surface: &Surface,
    ) -> ChartResult<RenderRequest> {
        ensure_kind(definition, ChartKind::Matrix)?;
        let dataset = definition.matrix().ok_or_else(|| {
            ChartError::InvalidData(format!(
                "matrix definition `{}` needs a matrix dataset",
                definition.id
            ))
        })?;

        let size = resolve_matrix_cell_size(MatrixCellSizeContext {
            plot_area: surface.plot_area()?,
            cell_fraction: self.policy.cell_fraction,
        });

        let cells = dataset
            .cells
            .iter()
            .map(|cell| {
                let style = MatrixCellStyleContext {
                    value: cell.value,
                    base_color: self.policy.cell_color,
                };
                MatrixCellRender {
                    row_key: cell.row_key.clone(),
                    col_key: cell.col_key.clone(),
                    value: cell.value,
                    opacity: resolve_matrix_cell_opacity(style),
                    fill: resolve_matrix_cell_fill(style),
                    width_px: size.width_px,
                    height_px: size.height_px,
                    tooltip: format_matrix_tooltip(cell),
                }
            })
            .collect();

        Ok(RenderRequest {
            definition_id: definition.id.clone(),
            kind: ChartKind::Matrix,
            payload: RenderPayload::Matrix(MatrixRenderData {
                name: dataset.name.clone(),
                col_labels: dataset.col_labels.clone(),
                row_labels: dataset.row_labels.clone(),
                cells,
                border_color: self.policy.border_color,
                border_width_px: self.policy.border_width_px,
            }),
            options: resolve_matrix_options(&definition.options),
        })
    }
}
