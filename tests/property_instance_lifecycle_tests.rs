use attendance_charts::api::{
    ChartDashboard, DashboardConfig, InstanceState, MatrixCellStyleContext,
    resolve_matrix_cell_opacity,
};
use attendance_charts::core::Viewport;
use attendance_charts::core::attendance_catalog::{
    ATTENDANCE_BAR_SURFACE_ID, MONTHLY_TREND_SURFACE_ID, SUBJECT_HEATMAP_SURFACE_ID,
};
use attendance_charts::host::{Surface, SurfaceMap, SurfaceResolver};
use attendance_charts::render::{Color, HeadlessEngine};
use proptest::prelude::*;

const SURFACE_IDS: [&str; 3] = [
    ATTENDANCE_BAR_SURFACE_ID,
    MONTHLY_TREND_SURFACE_ID,
    SUBJECT_HEATMAP_SURFACE_ID,
];

#[derive(Debug, Clone)]
enum HostStep {
    RenderPass,
    AddSurface(usize, u32, u32),
    RemoveSurface(usize),
    Resize(usize, u32, u32),
    DisposeAll,
}

fn host_step_strategy() -> impl Strategy<Value = HostStep> {
    prop_oneof![
        3 => Just(HostStep::RenderPass),
        2 => (0usize..3, 1u32..2_000, 1u32..2_000)
            .prop_map(|(index, width, height)| HostStep::AddSurface(index, width, height)),
        1 => (0usize..3).prop_map(HostStep::RemoveSurface),
        2 => (0usize..3, 1u32..2_000, 1u32..2_000)
            .prop_map(|(index, width, height)| HostStep::Resize(index, width, height)),
        1 => Just(HostStep::DisposeAll),
    ]
}

proptest! {
    #[test]
    fn at_most_one_live_instance_per_definition(
        steps in prop::collection::vec(host_step_strategy(), 1..40)
    ) {
        let engine = HeadlessEngine::new();
        let probe = engine.clone();
        let config = DashboardConfig::attendance().expect("attendance config");
        let mut dashboard = ChartDashboard::new(config, engine, SurfaceMap::new())
            .expect("dashboard init");

        for step in steps {
            match step {
                HostStep::RenderPass => {
                    let report = dashboard.initialize_all_charts();
                    prop_assert!(report.is_clean());
                    for definition in dashboard.catalog().iter() {
                        let has_surface = dashboard
                            .surfaces()
                            .lookup_surface(&definition.surface_id)
                            .is_some();
                        let expected = if has_surface {
                            InstanceState::Live
                        } else {
                            InstanceState::Absent
                        };
                        prop_assert_eq!(dashboard.instance_state(&definition.id), expected);
                    }
                }
                HostStep::AddSurface(index, width, height) => {
                    dashboard.surfaces_mut().insert(Surface::new(
                        SURFACE_IDS[index],
                        Viewport::new(width, height),
                    ));
                }
                HostStep::RemoveSurface(index) => {
                    dashboard.surfaces_mut().remove(SURFACE_IDS[index]);
                }
                HostStep::Resize(index, width, height) => {
                    dashboard
                        .surfaces_mut()
                        .resize(SURFACE_IDS[index], Viewport::new(width, height));
                }
                HostStep::DisposeAll => {
                    prop_assert!(dashboard.dispose_all().is_empty());
                    prop_assert_eq!(dashboard.live_instance_count(), 0);
                }
            }

            let stats = probe.stats();
            prop_assert_eq!(stats.live, dashboard.live_instance_count());
            prop_assert_eq!(stats.created - stats.disposed, stats.live);
            prop_assert!(dashboard.live_instance_count() <= dashboard.catalog().len());
        }
    }

    #[test]
    fn matrix_opacity_is_unclamped_ratio(value in -1_000.0f64..1_000.0) {
        let opacity = resolve_matrix_cell_opacity(MatrixCellStyleContext {
            value,
            base_color: Color::from_rgb8(70, 130, 180),
        });
        prop_assert_eq!(opacity, value / 100.0);
    }
}
