use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Styling applied to every categorical bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarStylePolicy {
    pub corner_radius_px: f64,
}

impl Default for BarStylePolicy {
    fn default() -> Self {
        Self {
            corner_radius_px: 6.0,
        }
    }
}

impl BarStylePolicy {
    pub fn validate(self) -> ChartResult<()> {
        if !self.corner_radius_px.is_finite() || self.corner_radius_px < 0.0 {
            return Err(ChartError::InvalidConfig(
                "bar corner radius must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Styling applied to every trend line chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStylePolicy {
    /// Bezier curve tension; `0` draws straight segments.
    pub tension: f64,
    /// Alpha of the area under the curve, applied to the series color.
    pub fill_alpha: f64,
    pub filled: bool,
}

impl Default for LineStylePolicy {
    fn default() -> Self {
        Self {
            tension: 0.4,
            fill_alpha: 0.2,
            filled: true,
        }
    }
}

impl LineStylePolicy {
    pub fn validate(self) -> ChartResult<()> {
        if !self.tension.is_finite() || !(0.0..=1.0).contains(&self.tension) {
            return Err(ChartError::InvalidConfig(
                "line tension must be finite and in [0, 1]".to_owned(),
            ));
        }
        if !self.fill_alpha.is_finite() || !(0.0..=1.0).contains(&self.fill_alpha) {
            return Err(ChartError::InvalidConfig(
                "line fill alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Styling applied to every value-matrix chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixStylePolicy {
    /// Base cell color; its alpha is replaced by the per-cell opacity.
    pub cell_color: Color,
    pub border_color: Color,
    pub border_width_px: f64,
    /// Share of the plotting area one cell spans along each axis.
    pub cell_fraction: f64,
}

impl Default for MatrixStylePolicy {
    fn default() -> Self {
        Self {
            cell_color: Color::from_rgb8(70, 130, 180),
            border_color: Color::WHITE,
            border_width_px: 1.0,
            cell_fraction: 0.2,
        }
    }
}

impl MatrixStylePolicy {
    pub fn validate(self) -> ChartResult<()> {
        self.cell_color.validate()?;
        self.border_color.validate()?;
        if !self.border_width_px.is_finite() || self.border_width_px < 0.0 {
            return Err(ChartError::InvalidConfig(
                "matrix border width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.cell_fraction.is_finite() || self.cell_fraction <= 0.0 || self.cell_fraction > 1.0
        {
            return Err(ChartError::InvalidConfig(
                "matrix cell fraction must be finite and in (0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Per-kind styling policies used by the chart type builders.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderPolicies {
    pub bar: BarStylePolicy,
    pub line: LineStylePolicy,
    pub matrix: MatrixStylePolicy,
}

impl BuilderPolicies {
    pub fn validate(self) -> ChartResult<()> {
        self.bar.validate()?;
        self.line.validate()?;
        self.matrix.validate()
    }
}
