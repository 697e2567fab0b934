//! Profile API context for the UI.

use api::HttpApi;
use dioxus::prelude::*;

/// Get the API client provided by [`ApiProvider`].
pub fn use_api() -> HttpApi {
    use_context::<HttpApi>()
}

/// Makes one shared [`HttpApi`] available to every component below it.
#[component]
pub fn ApiProvider(api: HttpApi, children: Element) -> Element {
    use_context_provider(move || api);

    rsx! {
        {children}
    }
}
