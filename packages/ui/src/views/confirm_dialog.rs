use dioxus::prelude::*;

use super::ModalOverlay;
use crate::components::{Button, ButtonVariant};

/// Yes/no question in a modal.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "modal-body",
                h2 { class: "modal-title", "{title}" }
                p { class: "modal-text", "{message}" }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
