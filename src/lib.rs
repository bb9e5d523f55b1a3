//! attendance-charts: chart catalog and instance lifecycle for an attendance dashboard.
//!
//! A static catalog of chart definitions is bound to host surfaces and a
//! pluggable rendering engine. Every lifecycle signal runs a full replace pass
//! that keeps at most one live engine instance per chart definition.

pub mod api;
pub mod core;
pub mod error;
pub mod host;
pub mod render;
pub mod telemetry;

pub use api::{ChartDashboard, DashboardConfig, RenderTrigger};
pub use error::{ChartError, ChartResult};
