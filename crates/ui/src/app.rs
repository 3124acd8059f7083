//! Main Application Component for Pedidos Admin
//!
//! The root component picks the screen from the global state and renders
//! the status bar and the application-wide dialogs around it.

use dioxus::prelude::*;

use crate::components::dialogs::{Modal, NoticeDialog};
use crate::context::AdminContext;
use crate::pages::{DashboardPage, LoginPage, RegisterPage};
use crate::state::{
    APP_STATE, Dialog, Screen, StatusMessage, acknowledge_dialog, use_current_screen,
};
use crate::{NAME, VERSION};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    let context = use_context::<AdminContext>();

    // Apply the stored session once, before any screen other than Loading
    use_effect(move || {
        let restored = context.restored_user();
        tracing::info!(
            "Pedidos Admin UI initialized ({})",
            if restored.is_some() { "session restored" } else { "no session" }
        );
        APP_STATE.write().restore(restored);
    });

    rsx! {
        div {
            class: "app-container",

            MainContent {}

            StatusBar {}

            DialogOverlay {}
        }
    }
}

// ============================================================================
// Main Content Component
// ============================================================================

/// Active screen
#[component]
fn MainContent() -> Element {
    let screen = use_current_screen();

    rsx! {
        main {
            class: "main-content",

            match screen {
                Screen::Loading => rsx! {
                    div { class: "loading", "{Screen::Loading.title()}" }
                },
                Screen::Login => rsx! {
                    div {
                        class: "auth-container",
                        AuthHeader {}
                        LoginPage {}
                    }
                },
                Screen::Register => rsx! {
                    div {
                        class: "auth-container",
                        AuthHeader {}
                        RegisterPage {}
                    }
                },
                Screen::Dashboard => rsx! { DashboardPage {} },
            }
        }
    }
}

/// Brand shown above the login and registration forms
#[component]
fn AuthHeader() -> Element {
    rsx! {
        div {
            class: "auth-header",
            span { class: "auth-logo", "🍔" }
            h1 { "{NAME}" }
        }
    }
}

// ============================================================================
// Status Bar Component
// ============================================================================

/// Text of the status bar's left side
pub fn status_text(status: Option<&StatusMessage>) -> &str {
    status.map(|m| m.text.as_str()).unwrap_or("Listo")
}

/// Bottom status bar
#[component]
fn StatusBar() -> Element {
    let context = use_context::<AdminContext>();
    let state = APP_STATE.read();
    let status = state.ui.status_message.clone();
    let email = state.user.as_ref().map(|u| u.email.clone());
    drop(state);

    let level = status
        .as_ref()
        .map(|m| m.level.class())
        .unwrap_or("info");
    let text = status_text(status.as_ref()).to_string();
    let api_url = context.client.api_base_url().to_string();

    rsx! {
        footer {
            class: "status-bar",

            span { class: "status-text {level}", "{text}" }

            // Spacer
            div { class: "spacer" }

            if let Some(email) = email {
                span { class: "status-item", "👤 {email}" }
            }

            span { class: "status-item", "{api_url}" }

            button {
                class: "link-btn",
                onclick: move |_| APP_STATE.write().ui.show_dialog(Dialog::About),
                "Acerca de"
            }
        }
    }
}

// ============================================================================
// Dialog Overlay Component
// ============================================================================

/// Application-wide dialog, if one is active
#[component]
fn DialogOverlay() -> Element {
    let context = use_context::<AdminContext>();
    let delay = context.config.register_redirect_delay();
    let dialog = APP_STATE.read().ui.active_dialog.clone();

    let Some(dialog) = dialog else {
        return rsx! {};
    };

    rsx! {
        Modal {
            size: "modal-sm",
            on_close: move |_| acknowledge_dialog(delay),

            match dialog {
                Dialog::Notice(notice) => rsx! { NoticeDialog { notice } },
                Dialog::About => rsx! { AboutDialog {} },
            }
        }
    }
}

/// About dialog
#[component]
fn AboutDialog() -> Element {
    let context = use_context::<AdminContext>();
    let auth_url = context.config.auth_base_url.clone();
    let api_url = context.config.api_base_url.clone();

    rsx! {
        div {
            class: "dialog about",

            p { class: "about-logo", "🍔" }
            h2 { "{NAME}" }
            p { class: "muted", "Versión {VERSION}" }

            dl {
                class: "about-endpoints",
                dt { "Autenticación" }
                dd { "{auth_url}" }
                dt { "API" }
                dd { "{api_url}" }
            }

            div {
                class: "dialog-actions",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| APP_STATE.write().ui.close_dialog(),
                    "Cerrar"
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusLevel;

    #[test]
    fn test_status_text_default() {
        assert_eq!(status_text(None), "Listo");
    }

    #[test]
    fn test_status_text_message() {
        let message = StatusMessage {
            text: "Stock actualizado".to_string(),
            level: StatusLevel::Success,
        };
        assert_eq!(status_text(Some(&message)), "Stock actualizado");
    }
}
