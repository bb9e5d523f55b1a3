use tracing::debug;

use crate::host::{LifecycleSignal, SignalQueue, SurfaceResolver};
use crate::render::RenderEngine;

use super::{ChartDashboard, RenderPassReport};

/// Routes lifecycle signals to full dashboard render passes.
///
/// Constructing the trigger is the one-time handler registration; every
/// handled signal simply calls `ChartDashboard::initialize_all_charts`.
/// Resize signals are not debounced: N resize signals run N passes.
pub struct RenderTrigger<E: RenderEngine, S: SurfaceResolver> {
    dashboard: ChartDashboard<E, S>,
    page_ready_handled: bool,
    resize_passes: u64,
}

impl<E: RenderEngine, S: SurfaceResolver> RenderTrigger<E, S> {
    #[must_use]
    pub fn new(dashboard: ChartDashboard<E, S>) -> Self {
        Self {
            dashboard,
            page_ready_handled: false,
            resize_passes: 0,
        }
    }

    /// Handles one signal. Returns `None` when the signal was ignored.
    pub fn on_signal(&mut self, signal: LifecycleSignal) -> Option<RenderPassReport> {
        match signal {
            LifecycleSignal::PageReady => {
                if self.page_ready_handled {
                    debug!("ignoring repeated page-ready signal");
                    return None;
                }
                self.page_ready_handled = true;
            }
            LifecycleSignal::ViewportResized => self.resize_passes += 1,
        }
        Some(self.dashboard.initialize_all_charts())
    }

    /// Processes queued signals in arrival order, each pass to completion.
    pub fn drain(&mut self, queue: &mut SignalQueue) -> Vec<RenderPassReport> {
        let mut reports = Vec::with_capacity(queue.len());
        while let Some(signal) = queue.pop() {
            reports.extend(self.on_signal(signal));
        }
        reports
    }

    #[must_use]
    pub fn page_ready_handled(&self) -> bool {
        self.page_ready_handled
    }

    #[must_use]
    pub fn resize_pass_count(&self) -> u64 {
        self.resize_passes
    }

    #[must_use]
    pub fn dashboard(&self) -> &ChartDashboard<E, S> {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut ChartDashboard<E, S> {
        &mut self.dashboard
    }

    #[must_use]
    pub fn into_dashboard(self) -> ChartDashboard<E, S> {
        self.dashboard
    }
}
