//! Products Panel Component
//!
//! Filter bar, product table, the product form and the delete confirmation.
//! Both modals belong to this panel and close with it.

use dioxus::prelude::*;
use pedidos_api::client::DELETE_PRODUCT_FAILED;
use pedidos_core::display::NO_PRODUCTS;
use pedidos_core::{Category, Product};
use tracing::warn;

use crate::components::dialogs::{ConfirmDeleteDialog, Modal, ProductFormDialog};
use crate::components::inputs::{Select, SelectOption, TextInput};
use crate::components::tables::{PRODUCT_COLUMNS, ProductTableRow};
use crate::context::AdminContext;
use crate::hooks::use_resource_list;

/// Options of the category filter
///
/// The server's list when it has one, otherwise the built-in categories.
pub fn category_filter_options(fetched: &[Category]) -> Vec<SelectOption> {
    let source: Vec<Category> = if fetched.is_empty() {
        Category::ALL.to_vec()
    } else {
        fetched.to_vec()
    };
    source
        .iter()
        .map(|c| SelectOption::plain(c.as_str()))
        .collect()
}

/// Value of the `activo` filter select
pub fn activo_value(activo: Option<bool>) -> &'static str {
    match activo {
        None => "",
        Some(true) => "true",
        Some(false) => "false",
    }
}

/// Parse the `activo` filter select
pub fn parse_activo(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Products tab
#[component]
pub fn ProductsPanel() -> Element {
    let context = use_context::<AdminContext>();
    let list = use_resource_list::<Product>();

    let categories = use_resource(move || {
        let client = context.client.clone();
        async move {
            match client.categories().await {
                Ok(categories) => categories,
                Err(e) => {
                    warn!("Failed to load categories: {}", e);
                    Vec::new()
                }
            }
        }
    });

    // Outer None: closed; inner None: creating
    let mut editing = use_signal(|| None::<Option<Product>>);
    let mut deleting = use_signal(|| None::<Product>);

    let state = list.snapshot();
    let filters = state.filters.clone();
    let category_options = category_filter_options(
        categories.read().as_deref().unwrap_or_default(),
    );
    let categoria_value = filters
        .categoria
        .as_ref()
        .map(|c| c.as_str().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "admin-products",

            div {
                class: "products-header",
                h2 { "Gestión de Productos" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| editing.set(Some(None)),
                    "➕ Nuevo Producto"
                }
            }

            div {
                class: "filters",

                Select {
                    value: categoria_value,
                    options: category_options,
                    empty_option: "Todas las categorías".to_string(),
                    on_change: move |v: String| {
                        list.update_filters(|f| {
                            f.categoria = if v.is_empty() { None } else { Some(Category::from(v)) };
                        });
                    },
                }

                Select {
                    value: activo_value(filters.activo).to_string(),
                    options: vec![
                        SelectOption::new("true", "Activos"),
                        SelectOption::new("false", "Inactivos"),
                    ],
                    empty_option: "Todos los estados".to_string(),
                    on_change: move |v: String| {
                        list.update_filters(|f| f.activo = parse_activo(&v));
                    },
                }

                TextInput {
                    value: filters.search.clone(),
                    placeholder: "Buscar productos...".to_string(),
                    class: "search-input".to_string(),
                    on_change: move |v| list.update_filters(|f| f.search = v),
                }
            }

            if state.loading {
                div { class: "loading", "Cargando productos..." }
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
                div { class: "no-data", "{NO_PRODUCTS}" }
            } else {
                div {
                    class: "table-container",
                    table {
                        class: "data-table products-table",
                        thead {
                            tr {
                                for column in PRODUCT_COLUMNS {
                                    th { key: "{column}", "{column}" }
                                }
                            }
                        }
                        tbody {
                            for product in state.items.iter().cloned() {
                                ProductTableRow {
                                    key: "{product.id}",
                                    product,
                                    list,
                                    on_edit: move |p| editing.set(Some(Some(p))),
                                    on_delete: move |p| deleting.set(Some(p)),
                                }
                            }
                        }
                    }
                }
            }

            if let Some(product) = editing.read().clone() {
                Modal {
                    size: "modal-lg",
                    on_close: move |_| editing.set(None),
                    ProductFormDialog {
                        product,
                        list,
                        on_close: move |_| editing.set(None),
                    }
                }
            }

            if let Some(product) = deleting.read().clone() {
                Modal {
                    size: "modal-sm",
                    on_close: move |_| deleting.set(None),
                    ConfirmDeleteDialog {
                        item_name: product.nombre.clone(),
                        on_cancel: move |_| deleting.set(None),
                        on_confirm: move |_| {
                            let id = product.id.clone();
                            deleting.set(None);
                            list.mutate(
                                "Producto eliminado",
                                DELETE_PRODUCT_FAILED,
                                move |products| async move { products.delete(&id).await },
                            );
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_options_fall_back() {
        let options = category_filter_options(&[]);
        assert_eq!(options.len(), Category::ALL.len());
        assert_eq!(options[0].value, "Hamburguesas");
    }

    #[test]
    fn test_category_options_from_server() {
        let options = category_filter_options(&[Category::from("Sopas")]);
        assert_eq!(options, vec![SelectOption::plain("Sopas")]);
    }

    #[test]
    fn test_activo_select_values() {
        for activo in [None, Some(true), Some(false)] {
            assert_eq!(parse_activo(activo_value(activo)), activo);
        }
        assert_eq!(parse_activo("otro"), None);
    }
}
