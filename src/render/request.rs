use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, RenderOptions};
use crate::render::Color;

/// Resolved bar series, styled by the bar policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeriesRender {
    pub name: String,
    pub values: Vec<f64>,
    pub fill: Color,
    pub corner_radius_px: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarRenderData {
    pub labels: Vec<String>,
    pub series: Vec<BarSeriesRender>,
}

/// Resolved trend series: a smoothed stroke with an optional filled area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeriesRender {
    pub name: String,
    pub values: Vec<f64>,
    pub stroke: Color,
    pub area_fill: Color,
    pub filled: bool,
    pub tension: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRenderData {
    pub labels: Vec<String>,
    pub series: Vec<LineSeriesRender>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipText {
    pub title: String,
    pub body: String,
}

/// One resolved matrix cell.
///
/// `opacity` is the raw `value / 100` ratio and is not clamped, so `fill.alpha`
/// may fall outside `[0, 1]` for out-of-range values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixCellRender {
    pub row_key: String,
    pub col_key: String,
    pub value: f64,
    pub opacity: f64,
    pub fill: Color,
    pub width_px: f64,
    pub height_px: f64,
    pub tooltip: TooltipText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRenderData {
    pub name: String,
    pub col_labels: Vec<String>,
    pub row_labels: Vec<String>,
    pub cells: Vec<MatrixCellRender>,
    pub border_color: Color,
    pub border_width_px: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderPayload {
    Bar(BarRenderData),
    Line(LineRenderData),
    Matrix(MatrixRenderData),
}

/// Fully resolved engine call produced by a chart type builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub definition_id: String,
    pub kind: ChartKind,
    pub payload: RenderPayload,
    pub options: RenderOptions,
}

impl RenderRequest {
    #[must_use]
    pub fn bar(&self) -> Option<&BarRenderData> {
        match &self.payload {
            RenderPayload::Bar(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn line(&self) -> Option<&LineRenderData> {
        match &self.payload {
            RenderPayload::Line(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn matrix(&self) -> Option<&MatrixRenderData> {
        match &self.payload {
            RenderPayload::Matrix(data) => Some(data),
            _ => None,
        }
    }
}
