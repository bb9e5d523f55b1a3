use crate::core::PlotArea;
use crate::render::Color;

/// Inputs for resolving the fill of one matrix cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixCellStyleContext {
    pub value: f64,
    pub base_color: Color,
}

/// Inputs for resolving matrix cell geometry in the current render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixCellSizeContext {
    pub plot_area: PlotArea,
    pub cell_fraction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixCellSize {
    pub width_px: f64,
    pub height_px: f64,
}

/// Opacity is the raw percentage ratio `value / 100`.
///
/// Values outside `0..=100` produce opacities outside `0..=1`; no clamping.
#[must_use]
pub fn resolve_matrix_cell_opacity(context: MatrixCellStyleContext) -> f64 {
    context.value / 100.0
}

#[must_use]
pub fn resolve_matrix_cell_fill(context: MatrixCellStyleContext) -> Color {
    context
        .base_color
        .with_alpha(resolve_matrix_cell_opacity(context))
}

#[must_use]
pub fn resolve_matrix_cell_size(context: MatrixCellSizeContext) -> MatrixCellSize {
    MatrixCellSize {
        width_px: context.plot_area.width * context.cell_fraction,
        height_px: context.plot_area.height * context.cell_fraction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn style(value: f64) -> MatrixCellStyleContext {
        MatrixCellStyleContext {
            value,
            base_color: Color::from_rgb8(70, 130, 180),
        }
    }

    #[test]
    fn opacity_is_value_over_hundred() {
        assert_relative_eq!(resolve_matrix_cell_opacity(style(85.0)), 0.85);
        assert_relative_eq!(resolve_matrix_cell_fill(style(78.0)).alpha, 0.78);
    }

    #[test]
    fn out_of_range_values_are_not_clamped() {
        assert_relative_eq!(resolve_matrix_cell_opacity(style(150.0)), 1.5);
        assert_relative_eq!(resolve_matrix_cell_opacity(style(-20.0)), -0.2);
    }

    #[test]
    fn cell_size_tracks_plot_area() {
        let size = resolve_matrix_cell_size(MatrixCellSizeContext {
            plot_area: PlotArea {
                x: 0.0,
                y: 0.0,
                width: 500.0,
                height: 300.0,
            },
            cell_fraction: 0.2,
        });
        assert_relative_eq!(size.width_px, 100.0);
        assert_relative_eq!(size.height_px, 60.0);
    }
}
