//! Dashboard Page Component
//!
//! Header with the operator's name and logout, the tab bar, and the panel
//! of the active tab. Panels mount when their tab is selected, so each one
//! fetches fresh data on entry.

use dioxus::prelude::*;
use tracing::info;

use crate::context::AdminContext;
use crate::pages::{OrdersPanel, ProductsPanel, StatsPanel};
use crate::state::{APP_STATE, DashboardTab, use_active_tab};

/// Dashboard screen
#[component]
pub fn DashboardPage() -> Element {
    let context = use_context::<AdminContext>();
    let active = use_active_tab();
    let name = APP_STATE.read().display_name();

    rsx! {
        div {
            class: "admin-dashboard",

            header {
                class: "admin-header",
                h1 { "Bienvenido, {name}" }
                button {
                    class: "btn btn-logout",
                    onclick: move |_| {
                        info!("Operator logged out");
                        context.forget();
                        APP_STATE.write().sign_out();
                    },
                    "CERRAR SESIÓN"
                }
            }

            nav {
                class: "admin-nav",
                for tab in DashboardTab::ALL {
                    button {
                        key: "{tab.label()}",
                        class: if tab == active { "nav-btn active" } else { "nav-btn" },
                        onclick: move |_| APP_STATE.write().ui.select_tab(tab),
                        span { class: "nav-icon", "{tab.icon()}" }
                        "{tab.label()}"
                    }
                }
            }

            main {
                class: "admin-content",
                match active {
                    DashboardTab::Stats => rsx! { StatsPanel {} },
                    DashboardTab::Products => rsx! { ProductsPanel {} },
                    DashboardTab::Orders => rsx! { OrdersPanel {} },
                }
            }
        }
    }
}
