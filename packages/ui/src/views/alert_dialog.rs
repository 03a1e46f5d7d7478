use api::Alert;
use dioxus::prelude::*;

/// A blocking alert: a full-screen overlay with a titled card and an OK button.
/// Clicking outside the card also dismisses it.
#[component]
pub fn AlertDialog(alert: Alert, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "alert-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "alert-card",
                role: "alertdialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                h2 { class: "alert-title", "{alert.title}" }
                p { class: "alert-message", "{alert.message}" }
                button {
                    class: "alert-button",
                    onclick: move |_| on_close.call(()),
                    "OK"
                }
            }
        }
    }
}
