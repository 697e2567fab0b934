use dioxus::prelude::*;

/// Dimmed full-screen backdrop with a centred card. Clicking the backdrop calls `on_close`.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    #[props(default)] wide: bool,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: if wide { "modal-card wide" } else { "modal-card" },
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
