//! # Table Rows
//!
//! One row per product or order. Text comes from the row view models in
//! `pedidos_core::display`; the inline controls start mutations on the
//! panel's list.

use dioxus::prelude::*;
use pedidos_api::client::{TOGGLE_PRODUCT_FAILED, UPDATE_STATUS_FAILED, UPDATE_STOCK_FAILED};
use pedidos_core::validation::parse_stock;
use pedidos_core::{Order, OrderRow, OrderStatus, Product, ProductRow};
use tracing::debug;

use crate::hooks::{OrderList, ProductList};

// ============================================================================
// Product Row
// ============================================================================

/// Product table columns
pub const PRODUCT_COLUMNS: [&str; 7] = [
    "Imagen",
    "Nombre",
    "Categoría",
    "Precio",
    "Stock",
    "Estado",
    "Acciones",
];

#[component]
pub fn ProductTableRow(
    product: Product,
    list: ProductList,
    on_edit: EventHandler<Product>,
    on_delete: EventHandler<Product>,
) -> Element {
    let row = ProductRow::from_product(&product);
    let stock_id = row.id.clone();
    let toggle_id = row.id.clone();
    let edit_target = product.clone();
    let delete_target = product;
    let toggle_title = if row.active { "Desactivar" } else { "Activar" };

    rsx! {
        tr {
            class: if row.active { "" } else { "inactive" },

            td {
                img {
                    class: "product-image",
                    src: "{row.image}",
                    alt: "{row.nombre}",
                    loading: "lazy",
                }
            }

            td {
                div {
                    class: "product-name",
                    "{row.nombre}"
                    if !row.excerpt.is_empty() {
                        small { "{row.excerpt}" }
                    }
                }
            }

            td { "{row.categoria}" }

            td { "{row.price}" }

            td {
                input {
                    class: "input stock-input",
                    r#type: "number",
                    min: "0",
                    value: "{row.stock}",
                    oninput: move |e: FormEvent| {
                        let value = e.value();
                        if parse_stock(&value).is_none() {
                            debug!("Ignoring stock input '{}'", value);
                            return;
                        }
                        let id = stock_id.clone();
                        list.mutate("Stock actualizado", UPDATE_STOCK_FAILED, move |products| async move {
                            products.update_stock(&id, &value).await.map(|_| ())
                        });
                    },
                }
            }

            td {
                span {
                    class: if row.active { "status active" } else { "status inactive" },
                    "{row.status}"
                }
            }

            td {
                div {
                    class: "actions",

                    button {
                        class: "btn-icon btn-edit",
                        title: "Editar",
                        onclick: move |_| on_edit.call(edit_target.clone()),
                        "✏️"
                    }

                    button {
                        class: "btn-icon btn-toggle",
                        title: toggle_title,
                        onclick: move |_| {
                            let id = toggle_id.clone();
                            list.mutate(
                                "Estado del producto actualizado",
                                TOGGLE_PRODUCT_FAILED,
                                move |products| async move { products.toggle_active(&id).await },
                            );
                        },
                        "{row.toggle_icon}"
                    }

                    button {
                        class: "btn-icon btn-delete",
                        title: "Eliminar",
                        onclick: move |_| on_delete.call(delete_target.clone()),
                        "🗑️"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Order Row
// ============================================================================

/// Order table columns
pub const ORDER_COLUMNS: [&str; 8] = [
    "ID Pedido",
    "Usuario",
    "Fecha",
    "Productos",
    "Total",
    "Estado",
    "Método Pago",
    "Acciones",
];

/// Statuses offered by the row's select; an unknown current status is kept
pub fn status_choices(current: &OrderStatus) -> Vec<OrderStatus> {
    let mut choices = OrderStatus::ALL.to_vec();
    if !choices.contains(current) {
        choices.push(current.clone());
    }
    choices
}

#[component]
pub fn OrderTableRow(order: Order, list: OrderList) -> Element {
    let row = OrderRow::from_order(&order);
    let order_id = row.id.clone();
    let choices = status_choices(&row.status);

    rsx! {
        tr {
            td {
                span { class: "order-id", "{row.short_id}" }
            }

            td {
                div {
                    class: "user-info",
                    strong { "{row.user_name}" }
                    small { "{row.user_email}" }
                }
            }

            td { "{row.date}" }

            td {
                div {
                    class: "products-summary",
                    span { class: "products-count", "{row.items_count}" }
                    div {
                        class: "products-detail",
                        for (index, item) in row.items.iter().enumerate() {
                            div { key: "{index}", class: "product-item", "{item}" }
                        }
                    }
                }
            }

            td {
                span { class: "order-total", "{row.total}" }
            }

            td {
                span {
                    class: "status-badge",
                    style: "background-color: {row.status_color};",
                    "{row.status_label}"
                }
            }

            td { "{row.payment}" }

            td {
                select {
                    class: "input input-select status-select",
                    onchange: move |e: FormEvent| {
                        let estado = OrderStatus::from(e.value());
                        let id = order_id.clone();
                        list.mutate(
                            "Estado del pedido actualizado",
                            UPDATE_STATUS_FAILED,
                            move |orders| async move { orders.update_status(&id, &estado).await },
                        );
                    },

                    for status in choices {
                        option {
                            key: "{status}",
                            value: "{status.as_str()}",
                            selected: status == row.status,
                            "{status.label()}"
                        }
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
    fn test_status_choices_known() {
        assert_eq!(status_choices(&OrderStatus::Enviado).len(), 5);
    }

    #[test]
    fn test_status_choices_keeps_unknown() {
        let unknown = OrderStatus::from("devuelto");
        let choices = status_choices(&unknown);
        assert_eq!(choices.len(), 6);
        assert_eq!(choices.last(), Some(&unknown));
    }

    #[test]
    fn test_column_headers() {
        assert_eq!(PRODUCT_COLUMNS[0], "Imagen");
        assert_eq!(ORDER_COLUMNS[6], "Método Pago");
    }
}
