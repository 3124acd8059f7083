//! Stats Panel Component
//!
//! Summary cards and figures computed from the full product and order lists.

use dioxus::prelude::*;
use pedidos_core::DashboardStats;
use pedidos_core::display::format_currency;

use crate::hooks::{StatsState, use_dashboard_stats};

/// Label/value pairs of the "Resumen del Sistema" card
pub fn summary_items(stats: &DashboardStats) -> Vec<(&'static str, String)> {
    vec![
        ("Total Productos:", stats.total_productos.to_string()),
        ("Productos Activos:", stats.productos_activos.to_string()),
        ("Total Órdenes:", stats.total_ordenes.to_string()),
        ("Órdenes Hoy:", stats.ordenes_hoy.to_string()),
        ("Ventas Hoy:", format_currency(stats.ventas_hoy)),
        ("Ventas del Mes:", format_currency(stats.ventas_mes)),
    ]
}

/// Dashboard tab
#[component]
pub fn StatsPanel() -> Element {
    let stats = use_dashboard_stats();

    match stats.state() {
        StatsState::Loading => rsx! {
            div {
                class: "admin-stats",
                div { class: "loading", "Cargando estadísticas..." }
            }
        },
        StatsState::Failed(message) => rsx! {
            div {
                class: "admin-stats",
                div { class: "error-message", "{message}" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| stats.reload(),
                    "Reintentar"
                }
            }
        },
        StatsState::Ready(figures) => rsx! {
            div {
                class: "admin-stats",

                div {
                    class: "stats-grid",

                    StatCard {
                        icon: "📊",
                        label: "DASHBOARD",
                        description: "Panel Principal".to_string(),
                    }
                    StatCard {
                        icon: "📦",
                        label: "PRODUCTOS",
                        value: figures.total_productos.to_string(),
                        description: format!("{} activos", figures.productos_activos),
                    }
                    StatCard {
                        icon: "📋",
                        label: "PEDIDOS",
                        value: figures.total_ordenes.to_string(),
                        description: format!("{} hoy", figures.ordenes_hoy),
                    }
                }

                div {
                    class: "summary-card",
                    div {
                        class: "summary-header",
                        h3 { "Resumen del Sistema" }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| stats.reload(),
                            "Actualizar"
                        }
                    }
                    div {
                        class: "summary-stats",
                        for (label, value) in summary_items(&figures) {
                            div {
                                key: "{label}",
                                class: "summary-item",
                                span { class: "summary-label", "{label}" }
                                span { class: "summary-value", "{value}" }
                            }
                        }
                    }
                }
            }
        },
    }
}

/// One headline card
#[component]
fn StatCard(
    icon: &'static str,
    label: &'static str,
    #[props(default)] value: Option<String>,
    description: String,
) -> Element {
    rsx! {
        div {
            class: "stat-card",
            div { class: "stat-icon", "{icon}" }
            div {
                class: "stat-content",
                div { class: "stat-label", "{label}" }
                if let Some(value) = value {
                    div { class: "stat-value", "{value}" }
                }
                div { class: "stat-description", "{description}" }
            }
        }
    }
}
