use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, PlotInsets, Viewport};
use crate::error::ChartResult;

/// Addressable page region able to host one rendered chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    id: String,
    viewport: Viewport,
    #[serde(default)]
    insets: PlotInsets,
}

impl Surface {
    #[must_use]
    pub fn new(id: impl Into<String>, viewport: Viewport) -> Self {
        Self {
            id: id.into(),
            viewport,
            insets: PlotInsets::default(),
        }
    }

    #[must_use]
    pub fn with_insets(mut self, insets: PlotInsets) -> Self {
        self.insets = insets;
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn insets(&self) -> PlotInsets {
        self.insets
    }

    /// Current plotting area; recomputed from the live viewport on every call.
    pub fn plot_area(&self) -> ChartResult<PlotArea> {
        PlotArea::resolve(self.viewport, self.insets)
    }
}

/// Resolves surface ids to drawable surfaces.
///
/// A missing id is a normal outcome and must yield `None`, never a panic.
pub trait SurfaceResolver {
    fn lookup_surface(&self, surface_id: &str) -> Option<Surface>;
}

/// In-memory surface table for headless hosts and tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurfaceMap {
    surfaces: IndexMap<String, Surface>,
}

impl SurfaceMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.insert(surface);
        self
    }

    /// Inserts or replaces the surface with the same id.
    pub fn insert(&mut self, surface: Surface) -> Option<Surface> {
        self.surfaces.insert(surface.id.clone(), surface)
    }

    pub fn remove(&mut self, surface_id: &str) -> Option<Surface> {
        self.surfaces.shift_remove(surface_id)
    }

    /// Changes the viewport of an existing surface. Returns `false` when absent.
    pub fn resize(&mut self, surface_id: &str, viewport: Viewport) -> bool {
        match self.surfaces.get_mut(surface_id) {
            Some(surface) => {
                surface.viewport = viewport;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

impl SurfaceResolver for SurfaceMap {
    fn lookup_surface(&self, surface_id: &str) -> Option<Surface> {
        self.surfaces.get(surface_id).cloned()
    }
}
