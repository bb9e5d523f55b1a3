use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel size of a drawable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plotting area for axes, titles and ticks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotInsets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotInsets {
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (side, value) in [
            ("left", self.left),
            ("right", self.right),
            ("top", self.top),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "plot inset `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Region inside a surface where series geometry is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Resolves the plotting area of `viewport` after removing `insets`.
    pub fn resolve(viewport: Viewport, insets: PlotInsets) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        insets.validate()?;

        let width = f64::from(viewport.width) - insets.left - insets.right;
        let height = f64::from(viewport.height) - insets.top - insets.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "plot insets leave no drawable area inside {}x{} surface",
                viewport.width, viewport.height
            )));
        }

        Ok(Self {
            x: insets.left,
            y: insets.top,
            width,
            height,
        })
    }
}
