use dioxus::prelude::*;

/// Single-line text input.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] autocomplete: String,
    #[props(default)] value: String,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            id: id,
            class: "input {class}",
            r#type: r#type,
            placeholder: placeholder,
            autocomplete: autocomplete,
            value: value,
            oninput: move |evt: FormEvent| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}
