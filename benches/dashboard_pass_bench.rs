use attendance_charts::api::{ChartDashboard, DashboardConfig};
use attendance_charts::core::Viewport;
use attendance_charts::core::attendance_catalog::{
    ATTENDANCE_BAR_SURFACE_ID, MONTHLY_TREND_SURFACE_ID, SUBJECT_HEATMAP_SURFACE_ID,
};
use attendance_charts::host::{Surface, SurfaceMap};
use attendance_charts::render::HeadlessEngine;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn attendance_dashboard() -> ChartDashboard<HeadlessEngine, SurfaceMap> {
    let config = DashboardConfig::attendance().expect("attendance config");
    let mut surfaces = SurfaceMap::new();
    for definition in &config.catalog {
        surfaces.insert(Surface::new(
            definition.surface_id.clone(),
            Viewport::new(800, 400),
        ));
    }
    ChartDashboard::new(config, HeadlessEngine::new(), surfaces).expect("dashboard")
}

fn bench_full_replace_pass(c: &mut Criterion) {
    let mut dashboard = attendance_dashboard();

    c.bench_function("attendance_full_replace_pass", |b| {
        b.iter(|| {
            let report = dashboard.initialize_all_charts();
            black_box(report.rendered.len());
        })
    });
}

fn bench_resize_burst(c: &mut Criterion) {
    c.bench_function("attendance_resize_burst_32", |b| {
        b.iter(|| {
            let mut dashboard = attendance_dashboard();
            for step in 0..32u32 {
                for surface_id in [
                    ATTENDANCE_BAR_SURFACE_ID,
                    MONTHLY_TREND_SURFACE_ID,
                    SUBJECT_HEATMAP_SURFACE_ID,
                ] {
                    dashboard
                        .surfaces_mut()
                        .resize(surface_id, Viewport::new(400 + step * 10, 300));
                }
                black_box(dashboard.initialize_all_charts());
            }
        })
    });
}

criterion_group!(benches, bench_full_replace_pass, bench_resize_burst);
criterion_main!(benches);
