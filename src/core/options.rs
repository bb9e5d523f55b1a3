use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// How an axis lays out its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisScaleKind {
    /// Values mapped against a numeric range.
    #[default]
    Linear,
    /// Discrete labels, one slot per category.
    Category,
}

/// Declarative options for one chart axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisOptions {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub scale: AxisScaleKind,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub begin_at_zero: bool,
    /// Shifts category slots by half a step so cells sit between grid lines.
    #[serde(default)]
    pub offset: bool,
}

impl AxisOptions {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_begin_at_zero(mut self, begin_at_zero: bool) -> Self {
        self.begin_at_zero = begin_at_zero;
        self
    }

    #[must_use]
    pub fn categorical(mut self, offset: bool) -> Self {
        self.scale = AxisScaleKind::Category;
        self.offset = offset;
        self
    }

    pub fn validate(&self, axis: &str) -> ChartResult<()> {
        for (bound, value) in [("min", self.min), ("max", self.max)] {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(ChartError::InvalidData(format!(
                        "{axis} axis {bound} must be finite"
                    )));
                }
            }
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min >= max {
                return Err(ChartError::InvalidData(format!(
                    "{axis} axis range must satisfy min < max"
                )));
            }
        }
        Ok(())
    }
}

/// Which samples a tooltip reports for the hovered position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TooltipMode {
    /// Only the sample nearest to the pointer.
    #[default]
    Nearest,
    /// Every series sample sharing the hovered x index.
    Index,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipOptions {
    pub enabled: bool,
    pub mode: TooltipMode,
    /// When `true` the pointer must be over the element to trigger.
    pub intersect: bool,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: TooltipMode::Nearest,
            intersect: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionAxis {
    X,
    Y,
    XY,
}

/// Hover hit-testing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionOptions {
    pub mode: TooltipMode,
    pub axis: InteractionAxis,
    pub intersect: bool,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            mode: TooltipMode::Nearest,
            axis: InteractionAxis::XY,
            intersect: true,
        }
    }
}

/// Declarative rendering options attached to a chart definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    #[serde(default)]
    pub x_axis: AxisOptions,
    #[serde(default)]
    pub y_axis: AxisOptions,
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: u32,
    #[serde(default)]
    pub tooltip: TooltipOptions,
    #[serde(default)]
    pub interaction: InteractionOptions,
    #[serde(default = "default_true")]
    pub legend_visible: bool,
    #[serde(default = "default_true")]
    pub responsive: bool,
    #[serde(default)]
    pub maintain_aspect_ratio: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            x_axis: AxisOptions::default(),
            y_axis: AxisOptions::default(),
            animation_duration_ms: default_animation_duration_ms(),
            tooltip: TooltipOptions::default(),
            interaction: InteractionOptions::default(),
            legend_visible: true,
            responsive: true,
            maintain_aspect_ratio: false,
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> ChartResult<()> {
        self.x_axis.validate("x")?;
        self.y_axis.validate("y")
    }
}

fn default_animation_duration_ms() -> u32 {
    1000
}

fn default_true() -> bool {
    true
}
