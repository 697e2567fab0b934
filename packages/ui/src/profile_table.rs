use admin::ProfileList;
use api::ProfileApi;
use dioxus::prelude::*;

use crate::{use_api, use_toasts, ProfileFormModal, ProfileRow};

const TABLE_CSS: Asset = asset!("/assets/styling/profiles.css");

/// The profile listing. Every successful mutation below it triggers one full refresh.
#[component]
pub fn ProfileTable() -> Element {
    let api = use_api();
    let mut toasts = use_toasts();
    let mut list = use_signal(ProfileList::default);

    let refresh = use_callback(move |()| {
        let api = api.clone();
        spawn(async move {
            let result = api.list_profiles().await;
            list.write().apply(result, &mut toasts);
        });
    });

    use_effect(move || refresh.call(()));

    let loading = list.read().is_loading();
    let profiles = list.read().profiles().to_vec();

    rsx! {
        document::Stylesheet { href: TABLE_CSS }

        div {
            class: "profiles",
            div {
                class: "profiles-toolbar",
                h1 { "Profiles" }
                ProfileFormModal { on_saved: move |_| refresh.call(()) }
            }
            table {
                class: "profiles-table",
                thead {
                    tr {
                        th { "ID" }
                        th { "Photo" }
                        th { "Username" }
                        th { "Email" }
                        th { "Type" }
                        th { "" }
                    }
                }
                tbody {
                    if loading {
                        tr { td { class: "placeholder", colspan: "6", "Loading..." } }
                    } else if profiles.is_empty() {
                        tr { td { class: "placeholder", colspan: "6", "No profiles yet" } }
                    }
                    for profile in profiles {
                        ProfileRow {
                            key: "{profile.id}",
                            profile,
                            on_changed: move |_| refresh.call(()),
                        }
                    }
                }
            }
        }
    }
}
