//! # Product Form Dialog
//!
//! Create or edit a product. Bound to `None` the form starts blank and
//! submits a `POST`; bound to a product it is pre-filled and submits a `PUT`.
//! Validation runs before anything is sent. On success the dialog closes and
//! the product list has already been refetched; on failure it stays open
//! with the error.

use dioxus::prelude::*;
use pedidos_api::client::SAVE_PRODUCT_FAILED;
use pedidos_core::{Category, Product, ProductForm};

use crate::components::inputs::{Checkbox, Select, SelectOption, TextArea, TextInput};
use crate::hooks::ProductList;
use crate::state::notify_success;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ProductFormDialogProps {
    /// Product being edited; `None` creates a new one
    pub product: Option<Product>,

    /// List refetched after a successful save
    pub list: ProductList,

    /// Called when the dialog should disappear
    pub on_close: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

#[component]
pub fn ProductFormDialog(props: ProductFormDialogProps) -> Element {
    let editing = props.product.is_some();
    let product = props.product.clone();
    let mut form = use_signal(move || {
        product
            .as_ref()
            .map(ProductForm::from_product)
            .unwrap_or_default()
    });
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let id = props.product.as_ref().map(|p| p.id.clone());
    let list = props.list;
    let on_close = props.on_close;

    let mut submit = move || {
        if *saving.read() {
            return;
        }
        let id = id.clone();
        let current = form.read().clone();
        saving.set(true);
        error.set(None);

        spawn(async move {
            let result = list.save(id, current.clone()).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    notify_success(format!("Producto '{}' guardado", current.nombre.trim()));
                    on_close.call(());
                }
                Err(e) => error.set(Some(e.mutation_message(SAVE_PRODUCT_FAILED))),
            }
        });
    };

    let current = form.read().clone();
    let preview = current.image_preview().map(str::to_string);
    let is_saving = *saving.read();

    let mut category_options: Vec<SelectOption> = Category::ALL
        .iter()
        .map(|c| SelectOption::plain(c.as_str()))
        .collect();
    if !Category::ALL.contains(&current.categoria) {
        category_options.push(SelectOption::plain(current.categoria.as_str()));
    }

    let title = if editing { "Editar Producto" } else { "Nuevo Producto" };
    let submit_label = match (is_saving, editing) {
        (true, _) => "Guardando...",
        (false, true) => "Actualizar",
        (false, false) => "Crear",
    };

    rsx! {
        form {
            class: "dialog product-form",
            novalidate: true,
            onsubmit: move |e| {
                e.prevent_default();
                submit();
            },

            div {
                class: "dialog-header",
                h2 { "{title}" }
                button {
                    r#type: "button",
                    class: "close-btn",
                    disabled: is_saving,
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }

            if let Some(message) = error.read().as_ref() {
                div { class: "error-message", "{message}" }
            }

            div {
                class: "info-message",
                "Los campos marcados con * son obligatorios. La imagen es opcional."
            }

            TextInput {
                label: "Nombre del Producto".to_string(),
                value: current.nombre.clone(),
                placeholder: "Ingresa el nombre del producto".to_string(),
                required: true,
                on_change: move |v| form.write().nombre = v,
            }

            TextArea {
                label: "Descripción".to_string(),
                value: current.descripcion.clone(),
                placeholder: "Describe el producto".to_string(),
                rows: 3,
                required: true,
                on_change: move |v| form.write().descripcion = v,
            }

            div {
                class: "form-row",

                TextInput {
                    label: "Precio".to_string(),
                    value: current.precio.clone(),
                    input_type: "number".to_string(),
                    min: "0".to_string(),
                    step: "0.01".to_string(),
                    prefix: "$".to_string(),
                    placeholder: "0.00".to_string(),
                    required: true,
                    on_change: move |v| form.write().precio = v,
                }

                TextInput {
                    label: "Stock".to_string(),
                    value: current.stock.clone(),
                    input_type: "number".to_string(),
                    min: "0".to_string(),
                    placeholder: "0".to_string(),
                    required: true,
                    on_change: move |v| form.write().stock = v,
                }
            }

            Select {
                label: "Categoría".to_string(),
                value: current.categoria.as_str().to_string(),
                options: category_options,
                required: true,
                on_change: move |v: String| form.write().categoria = Category::from(v),
            }

            TextInput {
                label: "URL de la Imagen".to_string(),
                value: current.imagen.clone(),
                input_type: "url".to_string(),
                placeholder: "https://ejemplo.com/imagen.jpg".to_string(),
                on_change: move |v| form.write().imagen = v,
            }

            if let Some(url) = preview {
                div {
                    class: "image-preview",
                    img { src: "{url}", alt: "Vista previa" }
                }
            }

            Checkbox {
                checked: current.activo,
                label: "Producto activo".to_string(),
                on_change: move |checked| form.write().activo = checked,
            }

            div {
                class: "dialog-actions",

                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    disabled: is_saving,
                    onclick: move |_| on_close.call(()),
                    "Cancelar"
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: is_saving,
                    "{submit_label}"
                }
            }
        }
    }
}
