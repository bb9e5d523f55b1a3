//! Built-in attendance dashboard catalog.

use crate::core::{
    AxisOptions, CategoricalDataset, ChartDefinition, ChartKind, DatasetSpec, DefinitionCatalog,
    InteractionAxis, InteractionOptions, MatrixCell, MatrixDataset, RenderOptions, SeriesSpec,
    TooltipMode, TooltipOptions,
};
use crate::error::ChartResult;
use crate::render::Color;

pub const ATTENDANCE_BAR_ID: &str = "attendanceBar";
pub const MONTHLY_TREND_ID: &str = "monthlyTrend";
pub const SUBJECT_HEATMAP_ID: &str = "subjectHeatmap";

pub const ATTENDANCE_BAR_SURFACE_ID: &str = "attendanceBarChart";
pub const MONTHLY_TREND_SURFACE_ID: &str = "monthlyAttendanceTrendChart";
pub const SUBJECT_HEATMAP_SURFACE_ID: &str = "subjectClassroomHeatmap";

const BAR_COLOR: Color = Color::from_rgb8(0x4e, 0x79, 0xa7);
const TREND_COLOR: Color = Color::from_rgb8(0xf2, 0x8e, 0x2c);

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

/// Present students per class for today.
#[must_use]
pub fn attendance_bar_definition() -> ChartDefinition {
    ChartDefinition {
        id: ATTENDANCE_BAR_ID.to_owned(),
        surface_id: ATTENDANCE_BAR_SURFACE_ID.to_owned(),
        kind: ChartKind::Bar,
        dataset: DatasetSpec::Categorical(CategoricalDataset {
            labels: labels(&["Class A", "Class B", "Class C", "Class D"]),
            series: vec![SeriesSpec::new(
                "Present Students",
                vec![28.0, 32.0, 26.0, 30.0],
                BAR_COLOR,
            )],
        }),
        options: RenderOptions {
            x_axis: AxisOptions::titled("Class"),
            y_axis: AxisOptions::titled("Number of Students").with_begin_at_zero(true),
            animation_duration_ms: 800,
            legend_visible: false,
            ..RenderOptions::default()
        },
    }
}

/// Weekly attendance percentage over the current month.
#[must_use]
pub fn monthly_trend_definition() -> ChartDefinition {
    ChartDefinition {
        id: MONTHLY_TREND_ID.to_owned(),
        surface_id: MONTHLY_TREND_SURFACE_ID.to_owned(),
        kind: ChartKind::Line,
        dataset: DatasetSpec::Categorical(CategoricalDataset {
            labels: labels(&["Week 1", "Week 2", "Week 3", "Week 4"]),
            series: vec![SeriesSpec::new(
                "Attendance %",
                vec![92.0, 85.0, 88.0, 94.0],
                TREND_COLOR,
            )],
        }),
        options: RenderOptions {
            x_axis: AxisOptions::titled("Week"),
            y_axis: AxisOptions::titled("Attendance %")
                .with_begin_at_zero(true)
                .with_range(0.0, 100.0),
            animation_duration_ms: 1000,
            tooltip: TooltipOptions {
                enabled: true,
                mode: TooltipMode::Index,
                intersect: false,
            },
            interaction: InteractionOptions {
                mode: TooltipMode::Nearest,
                axis: InteractionAxis::X,
                intersect: false,
            },
            legend_visible: true,
            ..RenderOptions::default()
        },
    }
}

/// Attendance percentage per subject and classroom.
#[must_use]
pub fn subject_heatmap_definition() -> ChartDefinition {
    ChartDefinition {
        id: SUBJECT_HEATMAP_ID.to_owned(),
        surface_id: SUBJECT_HEATMAP_SURFACE_ID.to_owned(),
        kind: ChartKind::Matrix,
        dataset: DatasetSpec::Matrix(MatrixDataset {
            name: "Subject-Classroom Attendance".to_owned(),
            row_labels: labels(&["CR1", "CR2"]),
            col_labels: labels(&["Math", "Physics", "Chemistry", "English"]),
            cells: vec![
                MatrixCell::new("CR1", "Math", 85.0),
                MatrixCell::new("CR1", "Physics", 92.0),
                MatrixCell::new("CR2", "Chemistry", 78.0),
                MatrixCell::new("CR2", "English", 88.0),
            ],
        }),
        options: RenderOptions {
            x_axis: AxisOptions::default().categorical(true),
            y_axis: AxisOptions::default().categorical(true),
            legend_visible: false,
            ..RenderOptions::default()
        },
    }
}

/// Full attendance dashboard in display order.
pub fn attendance_dashboard_catalog() -> ChartResult<DefinitionCatalog> {
    DefinitionCatalog::new(vec![
        attendance_bar_definition(),
        monthly_trend_definition(),
        subject_heatmap_definition(),
    ])
}
