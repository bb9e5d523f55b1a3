mod headless_engine;
mod primitives;
mod request;

pub use headless_engine::{HeadlessEngine, HeadlessEngineStats, HeadlessInstance};
pub use primitives::Color;
pub use request::{
    BarRenderData, BarSeriesRender, LineRenderData, LineSeriesRender, MatrixCellRender,
    MatrixRenderData, RenderPayload, RenderRequest, TooltipText,
};

use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::host::Surface;

/// Optional engine capabilities some chart kinds depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineExtension {
    /// Categorical grid controller used by value-matrix charts.
    Matrix,
}

impl EngineExtension {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Matrix => "matrix",
        }
    }
}

/// Live, disposable chart instance created by a `RenderEngine`.
pub trait InstanceHandle {
    /// Releases the engine resources held by this instance.
    ///
    /// Calling this on an already disposed handle must be a no-op.
    fn dispose(&mut self) -> ChartResult<()>;

    fn is_disposed(&self) -> bool;
}

/// Contract implemented by any rendering engine.
///
/// Engines receive a fully resolved `RenderRequest` so drawing code stays
/// isolated from catalog, styling policy and lifecycle logic.
pub trait RenderEngine {
    type Handle: InstanceHandle;

    fn has_extension(&self, extension: EngineExtension) -> bool;

    fn create_instance(
        &mut self,
        surface: &Surface,
        request: RenderRequest,
    ) -> ChartResult<Self::Handle>;
}
