pub mod attendance_catalog;
pub mod catalog;
pub mod definition;
pub mod options;
pub mod types;

pub use attendance_catalog::attendance_dashboard_catalog;
pub use catalog::DefinitionCatalog;
pub use definition::{
    CategoricalDataset, ChartDefinition, ChartKind, DatasetSpec, MatrixCell, MatrixDataset,
    SeriesSpec, SeriesStyle,
};
pub use options::{
    AxisOptions, AxisScaleKind, InteractionAxis, InteractionOptions, RenderOptions,
    TooltipMode, TooltipOptions,
};
pub use types::{PlotArea, PlotInsets, Viewport};
