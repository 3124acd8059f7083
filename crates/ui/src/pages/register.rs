//! Registration Page Component
//!
//! Name, email, password and confirmation. After a successful registration
//! the operator acknowledges a greeting, the form is cleared and the login
//! screen follows after the configured delay.

use dioxus::prelude::*;
use pedidos_api::client::REGISTER_FAILED;
use pedidos_core::RegisterForm;
use tracing::info;

use crate::components::inputs::TextInput;
use crate::context::AdminContext;
use crate::state::{APP_STATE, Dialog, Notice, Screen};

/// Registration screen
#[component]
pub fn RegisterPage() -> Element {
    let context = use_context::<AdminContext>();
    let mut form = use_signal(RegisterForm::default);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let mut submit = move || {
        if *loading.read() {
            return;
        }
        let current = form.read().clone();
        let context = context.clone();
        loading.set(true);
        error.set(None);

        spawn(async move {
            let result = context.client.register(&current).await;
            loading.set(false);
            match result {
                Ok(user) => {
                    info!("Registered a new operator");
                    form.set(RegisterForm::default());
                    APP_STATE
                        .write()
                        .ui
                        .show_dialog(Dialog::Notice(Notice::registered(&user)));
                }
                Err(e) => error.set(Some(e.user_message(REGISTER_FAILED))),
            }
        });
    };

    let current = form.read().clone();
    let is_loading = *loading.read();

    rsx! {
        div {
            class: "form-container",

            h2 { "Registrarse" }

            form {
                novalidate: true,
                onsubmit: move |e| {
                    e.prevent_default();
                    submit();
                },

                TextInput {
                    label: "Nombre:".to_string(),
                    value: current.nombre,
                    required: true,
                    on_change: move |v| {
                        form.write().nombre = v;
                        error.set(None);
                    },
                }

                TextInput {
                    label: "Email:".to_string(),
                    value: current.email,
                    input_type: "email".to_string(),
                    required: true,
                    on_change: move |v| {
                        form.write().email = v;
                        error.set(None);
                    },
                }

                TextInput {
                    label: "Contraseña:".to_string(),
                    value: current.password,
                    input_type: "password".to_string(),
                    required: true,
                    on_change: move |v| {
                        form.write().password = v;
                        error.set(None);
                    },
                }

                TextInput {
                    label: "Confirmar Contraseña:".to_string(),
                    value: current.confirm_password,
                    input_type: "password".to_string(),
                    required: true,
                    on_change: move |v| {
                        form.write().confirm_password = v;
                        error.set(None);
                    },
                }

                if let Some(message) = error.read().as_ref() {
                    div { class: "error", "{message}" }
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary btn-block",
                    disabled: is_loading,
                    if is_loading { "Registrando..." } else { "Registrarse" }
                }
            }

            div {
                class: "switch-form",
                "¿Ya tienes cuenta? "
                button {
                    r#type: "button",
                    class: "link-btn",
                    onclick: move |_| APP_STATE.write().navigate(Screen::Login),
                    "Inicia sesión aquí"
                }
            }
        }
    }
}
