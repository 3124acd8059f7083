//! Page controls of paginated panels

use dioxus::prelude::*;
use pedidos_core::Pagination;

/// "Página N de M"
pub fn page_label(pagination: &Pagination) -> String {
    format!("Página {} de {}", pagination.page, pagination.total_pages)
}

/// Previous/next controls, rendered only when there is more than one page
#[component]
pub fn PaginationControls(pagination: Pagination, on_page: EventHandler<u32>) -> Element {
    if !pagination.is_multi_page() {
        return rsx! {};
    }

    let page = pagination.page;

    rsx! {
        div {
            class: "pagination",

            button {
                class: "btn btn-secondary",
                disabled: !pagination.has_previous(),
                onclick: move |_| on_page.call(page.saturating_sub(1)),
                "← Anterior"
            }

            span {
                class: "pagination-info",
                "{page_label(&pagination)}"
            }

            button {
                class: "btn btn-secondary",
                disabled: !pagination.has_next(),
                onclick: move |_| on_page.call(page + 1),
                "Siguiente →"
            }
        }
    }
}
