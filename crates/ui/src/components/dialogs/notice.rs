//! Acknowledgement dialog for operation outcomes

use dioxus::prelude::*;

use crate::context::AdminContext;
use crate::state::{Notice, StatusLevel, acknowledge_dialog};

/// Title, message and an "Aceptar" button
#[component]
pub fn NoticeDialog(notice: Notice) -> Element {
    let context = use_context::<AdminContext>();
    let delay = context.config.register_redirect_delay();
    let icon = match notice.level {
        StatusLevel::Success => "✅",
        StatusLevel::Error => "❌",
        StatusLevel::Warning => "⚠️",
        StatusLevel::Info => "ℹ️",
    };
    let level = notice.level.class();

    rsx! {
        div {
            class: "dialog notice {level}",

            div {
                class: "dialog-header",
                span { class: "dialog-icon", "{icon}" }
                h2 { "{notice.title}" }
            }

            p {
                class: "dialog-message",
                "{notice.message}"
            }

            div {
                class: "dialog-actions",
                button {
                    class: "btn btn-primary",
                    autofocus: true,
                    onclick: move |_| acknowledge_dialog(delay),
                    "Aceptar"
                }
            }
        }
    }
}
