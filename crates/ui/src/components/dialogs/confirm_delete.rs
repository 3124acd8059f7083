//! # Confirm Delete Dialog Component
//!
//! Asks before a product is deleted. Nothing is sent until the operator
//! confirms.

use dioxus::prelude::*;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    /// Name of the record being deleted
    pub item_name: String,

    /// Called when deletion is confirmed
    pub on_confirm: EventHandler<()>,

    /// Called when the dialog is dismissed
    pub on_cancel: EventHandler<()>,
}

/// Question asked before deleting a product
pub const CONFIRM_DELETE_PRODUCT: &str = "¿Estás seguro de que quieres eliminar este producto?";

// ============================================================================
// Main Component
// ============================================================================

/// Confirmation dialog for delete operations
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    rsx! {
        div {
            class: "dialog confirm-delete",

            // Header with warning icon
            div {
                class: "dialog-header",
                span { class: "dialog-icon danger", "⚠️" }
                h2 { "Eliminar producto" }
            }

            p {
                class: "dialog-message",
                "{CONFIRM_DELETE_PRODUCT}"
            }

            if !props.item_name.is_empty() {
                div {
                    class: "dialog-item",
                    span { class: "muted", "Producto: " }
                    strong { "{props.item_name}" }
                }
            }

            // Actions
            div {
                class: "dialog-actions",

                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    onclick: move |_| props.on_cancel.call(()),
                    "Cancelar"
                }

                button {
                    r#type: "button",
                    class: "btn btn-danger",
                    onclick: move |_| props.on_confirm.call(()),
                    "🗑️ Eliminar"
                }
            }
        }
    }
}
