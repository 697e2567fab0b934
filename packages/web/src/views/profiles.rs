use dioxus::prelude::*;

use ui::ProfileTable;

#[component]
pub fn Profiles() -> Element {
    rsx! {
        ProfileTable {}
    }
}
