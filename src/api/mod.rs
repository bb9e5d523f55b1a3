mod bar_chart_builder;
mod chart_style_policy;
mod chart_type_builder;
mod dashboard;
mod dashboard_config;
mod instance_registry;
mod line_chart_builder;
mod matrix_cell_style_resolver;
mod matrix_chart_builder;
mod matrix_tooltip_formatter;
mod render_trigger;

pub use bar_chart_builder::BarChartBuilder;
pub use chart_style_policy::{
    BarStylePolicy, BuilderPolicies, LineStylePolicy, MatrixStylePolicy,
};
pub use chart_type_builder::{ChartBuilderSet, ChartTypeBuilder};
pub use dashboard::{ChartDashboard, DefinitionFailure, RenderPassReport};
pub use dashboard_config::{
    DASHBOARD_CONFIG_JSON_SCHEMA_V1, DashboardConfig, DashboardConfigJsonContractV1,
};
pub use instance_registry::{InstanceRegistry, InstanceState, Registration, RegistrationOutcome};
pub use line_chart_builder::{LineChartBuilder, PERCENT_AXIS_MAX, PERCENT_AXIS_MIN};
pub use matrix_cell_style_resolver::{
    MatrixCellSize, MatrixCellSizeContext, MatrixCellStyleContext, resolve_matrix_cell_fill,
    resolve_matrix_cell_opacity, resolve_matrix_cell_size,
};
pub use matrix_chart_builder::MatrixChartBuilder;
pub use matrix_tooltip_formatter::format_matrix_tooltip;
pub use render_trigger::RenderTrigger;
