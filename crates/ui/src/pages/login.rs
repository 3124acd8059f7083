//! Login Page Component
//!
//! Email and password form. Both fields are checked before anything is
//! sent; the `usuario` of a successful response becomes the session.

use dioxus::prelude::*;
use pedidos_api::client::LOGIN_FAILED;
use pedidos_core::LoginForm;
use tracing::info;

use crate::components::inputs::TextInput;
use crate::context::AdminContext;
use crate::state::{APP_STATE, Screen};

/// Login screen
#[component]
pub fn LoginPage() -> Element {
    let context = use_context::<AdminContext>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let mut submit = move || {
        if *loading.read() {
            return;
        }
        let form = LoginForm::new(email.read().clone(), password.read().clone());
        let context = context.clone();
        loading.set(true);
        error.set(None);

        spawn(async move {
            let result = context.client.login(&form).await;
            loading.set(false);
            match result {
                Ok(user) => {
                    info!("Operator logged in");
                    context.remember(user.clone());
                    APP_STATE.write().sign_in(user);
                }
                Err(e) => error.set(Some(e.user_message(LOGIN_FAILED))),
            }
        });
    };

    let is_loading = *loading.read();

    rsx! {
        div {
            class: "form-container",

            h2 { "Iniciar Sesión" }

            form {
                novalidate: true,
                onsubmit: move |e| {
                    e.prevent_default();
                    submit();
                },

                TextInput {
                    label: "Email:".to_string(),
                    value: email.read().clone(),
                    input_type: "email".to_string(),
                    required: true,
                    on_change: move |v| {
                        email.set(v);
                        error.set(None);
                    },
                }

                TextInput {
                    label: "Contraseña:".to_string(),
                    value: password.read().clone(),
                    input_type: "password".to_string(),
                    required: true,
                    on_change: move |v| {
                        password.set(v);
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
                    if is_loading { "Iniciando sesión..." } else { "Iniciar Sesión" }
                }
            }

            div {
                class: "switch-form",
                "¿No tienes cuenta? "
                button {
                    r#type: "button",
                    class: "link-btn",
                    onclick: move |_| APP_STATE.write().navigate(Screen::Register),
                    "Regístrate aquí"
                }
            }
        }
    }
}
