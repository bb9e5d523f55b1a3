//! Host-page boundary: drawable surface lookup and lifecycle signals.

mod lifecycle;
mod surface;

pub use lifecycle::{LifecycleSignal, SignalQueue};
pub use surface::{Surface, SurfaceMap, SurfaceResolver};
