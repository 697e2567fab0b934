use admin::DeletePrompt;
use api::Profile;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::FaTrash;
use crate::views::ConfirmDialog;
use crate::{use_api, use_toasts, Icon, ProfileFormModal};

/// One table row with its edit and delete actions.
#[component]
pub fn ProfileRow(profile: Profile, on_changed: EventHandler<()>) -> Element {
    let api = use_api();
    let mut toasts = use_toasts();
    let mut prompt = use_signal(DeletePrompt::default);

    let id = profile.id;
    let photo = profile.photo_url().map(|url| api.resolve(url));
    let type_name = match profile.type_name() {
        "" => "-".to_string(),
        name => name.to_string(),
    };
    let username = profile.username.clone();
    let email = profile.email.clone();

    let on_confirm = move |_| {
        let Some(confirmed) = prompt.write().confirm() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            if confirmed.execute(&api, &mut toasts).await {
                on_changed.call(());
            }
        });
    };

    rsx! {
        tr {
            td { class: "col-id", "{id}" }
            td {
                class: "col-photo",
                if let Some(src) = photo {
                    img { class: "thumb", src: "{src}", alt: "{username}" }
                }
            }
            td { "{username}" }
            td { "{email}" }
            td { "{type_name}" }
            td {
                class: "col-actions",
                ProfileFormModal { profile: profile.clone(), on_saved: on_changed }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "danger",
                    title: "Delete",
                    onclick: move |_| prompt.write().request(id),
                    Icon { icon: FaTrash, width: 14, height: 14 }
                }
                if prompt.read().is_open() {
                    ConfirmDialog {
                        title: "Delete profile",
                        message: "Delete {username}? This cannot be undone.",
                        on_confirm: on_confirm,
                        on_cancel: move |_| prompt.write().cancel(),
                    }
                }
            }
        }
    }
}
