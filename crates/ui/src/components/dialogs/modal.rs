//! Modal frame shared by every dialog

use dioxus::prelude::*;

/// Backdrop plus a centered card
///
/// Clicking the backdrop closes the modal unless `locked` is set, which
/// dialogs do while a request is running.
#[component]
pub fn Modal(
    children: Element,
    on_close: EventHandler<()>,
    #[props(default = "modal-md")] size: &'static str,
    #[props(default = false)] locked: bool,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",

            // Backdrop
            div {
                class: "modal-backdrop",
                onclick: move |_| {
                    if !locked {
                        on_close.call(());
                    }
                }
            }

            div {
                class: "modal {size}",
                onclick: move |e| e.stop_propagation(),
                {children}
            }
        }
    }
}
