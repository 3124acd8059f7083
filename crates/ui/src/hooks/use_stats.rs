//! Dashboard statistics hook

use dioxus::prelude::*;
use pedidos_api::client::STATS_FAILED;
use pedidos_core::DashboardStats;
use tracing::error;

use crate::context::AdminContext;

/// What the stats panel shows
#[derive(Debug, Clone, PartialEq)]
pub enum StatsState {
    Loading,
    Ready(DashboardStats),
    Failed(String),
}

/// Handle to the stats panel's data
#[derive(Clone, Copy, PartialEq)]
pub struct UseDashboardStats {
    context: CopyValue<AdminContext>,
    state: Signal<StatsState>,
}

/// Load the dashboard figures once on mount
pub fn use_dashboard_stats() -> UseDashboardStats {
    let context = use_context::<AdminContext>();
    let context = use_hook(|| CopyValue::new(context));
    let state = use_signal(|| StatsState::Loading);
    let stats = UseDashboardStats { context, state };
    use_effect(move || stats.reload());
    stats
}

impl UseDashboardStats {
    pub fn state(&self) -> StatsState {
        self.state.read().clone()
    }

    /// Fetch both lists again and recompute
    pub fn reload(mut self) {
        self.state.set(StatsState::Loading);
        let client = self.context.read().client.clone();
        spawn(async move {
            let next = match client.load_dashboard_stats().await {
                Ok(stats) => StatsState::Ready(stats),
                Err(e) => {
                    error!("Failed to load dashboard stats: {}", e);
                    StatsState::Failed(STATS_FAILED.to_string())
                }
            };
            self.state.set(next);
        });
    }
}
