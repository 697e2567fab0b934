use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "startup-error",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Profiles {}, "Back to profiles" }
        }
    }
}
