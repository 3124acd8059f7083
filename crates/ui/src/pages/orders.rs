//! Orders Panel Component
//!
//! Server-side paginated order table. Changing any filter returns to page 1.

use chrono::NaiveDate;
use dioxus::prelude::*;
use pedidos_core::display::NO_ORDERS;
use pedidos_core::filters::parse_date_input;
use pedidos_core::{Order, OrderStatus};

use crate::components::inputs::{Select, SelectOption, TextInput};
use crate::components::pagination::PaginationControls;
use crate::components::tables::{ORDER_COLUMNS, OrderTableRow};
use crate::hooks::use_resource_list;

/// Options of the status filter
pub fn status_filter_options() -> Vec<SelectOption> {
    OrderStatus::ALL
        .iter()
        .map(|s| SelectOption::new(s.as_str(), s.label()))
        .collect()
}

/// Value shown by a date input
fn date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Orders tab
#[component]
pub fn OrdersPanel() -> Element {
    let list = use_resource_list::<Order>();

    let state = list.snapshot();
    let filters = state.filters.clone();
    let estado_value = filters
        .estado
        .as_ref()
        .map(|s| s.as_str().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "admin-orders",

            div {
                class: "orders-header",
                h2 { "Ventas y Pedidos" }
                div { class: "orders-stats", "Total: {state.pagination.total} pedidos" }
            }

            div {
                class: "filters",

                TextInput {
                    value: filters.search.clone(),
                    placeholder: "Buscar por usuario o ID...".to_string(),
                    class: "search-input".to_string(),
                    on_change: move |v| list.update_filters(|f| f.search = v),
                }

                Select {
                    value: estado_value,
                    options: status_filter_options(),
                    empty_option: "Todos los estados".to_string(),
                    on_change: move |v: String| {
                        list.update_filters(|f| {
                            f.estado = if v.is_empty() { None } else { Some(OrderStatus::from(v)) };
                        });
                    },
                }

                TextInput {
                    label: "Desde:".to_string(),
                    value: date_value(filters.fecha_desde),
                    input_type: "date".to_string(),
                    on_change: move |v: String| {
                        list.update_filters(|f| f.fecha_desde = parse_date_input(&v));
                    },
                }

                TextInput {
                    label: "Hasta:".to_string(),
                    value: date_value(filters.fecha_hasta),
                    input_type: "date".to_string(),
                    on_change: move |v: String| {
                        list.update_filters(|f| f.fecha_hasta = parse_date_input(&v));
                    },
                }
            }

            if state.loading {
                div { class: "loading", "Cargando pedidos..." }
            } else if let Some(message) = state.error.as_ref() {
                div {
                    class: "error-message",
                    "{message}"
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| list.refresh(),
                        "Reintentar"
                    }
                }
            } else if state.items.is_empty() {
                div { class: "no-data", "{NO_ORDERS}" }
            } else {
                div {
                    class: "table-container",
                    table {
                        class: "data-table orders-table",
                        thead {
                            tr {
                                for column in ORDER_COLUMNS {
                                    th { key: "{column}", "{column}" }
                                }
                            }
                        }
                        tbody {
                            for order in state.items.iter().cloned() {
                                OrderTableRow {
                                    key: "{order.id}",
                                    order,
                                    list,
                                }
                            }
                        }
                    }
                }

                PaginationControls {
                    pagination: state.pagination,
                    on_page: move |page| list.set_page(page),
                }
            }
        }
    }
}
