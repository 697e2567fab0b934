//! Create/edit modal driven by [`admin::ProfileForm`].
//!
//! The modal owns its trigger button, so the table renders one for "New profile" and
//! each row renders one for its own record. Requests are spawned on this component's
//! scope and are dropped with it.

use admin::{Notifier, ProfileForm};
use api::{PhotoUpload, Profile, ProfileApi};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::icons::{FaPenToSquare, FaPlus};
use crate::views::ModalOverlay;
use crate::{use_api, use_toasts, Icon};

/// Trigger button plus modal. Pass `profile` to edit it; leave it out to create.
/// `on_saved` fires once per successful create or update.
#[component]
pub fn ProfileFormModal(profile: Option<Profile>, on_saved: EventHandler<()>) -> Element {
    let api = use_api();
    let mut toasts = use_toasts();
    let mut form_state = use_signal(ProfileForm::default);
    let mut saving = use_signal(|| false);

    let editing = profile.is_some();

    let open_api = api.clone();
    let open = move |_| {
        form_state.set(ProfileForm::open_for(profile.as_ref()));
        let api = open_api.clone();
        spawn(async move {
            let result = api.list_profile_types().await;
            form_state.write().apply_types(result, &mut toasts);
        });
    };

    let submit_api = api.clone();
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        saving.set(true);
        let draft = form_state();
        let api = submit_api.clone();
        spawn(async move {
            if draft.save(&api, &mut toasts).await.is_ok() {
                on_saved.call(());
                form_state.write().close();
            }
            saving.set(false);
        });
    };

    let on_photo = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let file_name = file.name();
        let content_type = file.content_type().unwrap_or_default();
        match file.read_bytes().await {
            Ok(bytes) => {
                let upload = PhotoUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                };
                let selected = form_state.write().select_photo(upload);
                if let Err(e) = selected {
                    toasts.error(&e.to_string());
                }
            }
            Err(e) => {
                tracing::error!("Failed to read {file_name}: {e}");
                toasts.error("The photo could not be read");
            }
        }
    };

    let (trigger_variant, trigger_title) = if editing {
        (ButtonVariant::Ghost, "Edit")
    } else {
        (ButtonVariant::Primary, "New profile")
    };
    let trigger = rsx! {
        Button {
            variant: trigger_variant,
            title: trigger_title,
            onclick: open,
            if editing {
                Icon { icon: FaPenToSquare, width: 14, height: 14 }
            } else {
                Icon { icon: FaPlus, width: 12, height: 12 }
                span { "New profile" }
            }
        }
    };

    let form = form_state.read();
    if !form.is_visible() {
        return trigger;
    }

    let title = form.title();
    let is_edit = form.is_edit();
    let username = form.username.clone();
    let email = form.email.clone();
    let password = form.password.clone();
    let rp_password = form.rp_password.clone();
    let selected_type = form.profile_type_id.clone();
    let types = form.types().to_vec();
    let preview = match form.photo_preview() {
        "" => None,
        reference => Some(api.resolve(reference)),
    };
    drop(form);

    rsx! {
        {trigger}

        ModalOverlay {
            wide: true,
            on_close: move |_| form_state.write().close(),
            form {
                class: "modal-body profile-form",
                onsubmit: onsubmit,
                h2 { class: "modal-title", "{title}" }

                div {
                    class: "form-row",
                    Label { html_for: "profile-username", "Username" }
                    Input {
                        id: "profile-username",
                        autocomplete: "off",
                        value: username,
                        oninput: move |evt: FormEvent| form_state.write().username = evt.value(),
                    }
                }

                div {
                    class: "form-row",
                    Label { html_for: "profile-email", "Email" }
                    Input {
                        id: "profile-email",
                        r#type: "email",
                        autocomplete: "off",
                        value: email,
                        oninput: move |evt: FormEvent| form_state.write().email = evt.value(),
                    }
                }

                div {
                    class: "form-row",
                    Label { html_for: "profile-type", "Profile type" }
                    select {
                        id: "profile-type",
                        class: "input",
                        value: selected_type.clone(),
                        onchange: move |evt: FormEvent| form_state.write().profile_type_id = evt.value(),
                        option { value: "", disabled: true, selected: selected_type.is_empty(), "Select..." }
                        for t in types {
                            option {
                                key: "{t.id}",
                                value: "{t.id}",
                                selected: selected_type == t.id.to_string(),
                                "{t.name}"
                            }
                        }
                    }
                }

                div {
                    class: "form-row",
                    Label { html_for: "profile-password",
                        "Password"
                        if is_edit {
                            span { class: "form-hint", " (fill in to change)" }
                        }
                    }
                    Input {
                        id: "profile-password",
                        r#type: "password",
                        autocomplete: "new-password",
                        value: password,
                        oninput: move |evt: FormEvent| form_state.write().password = evt.value(),
                    }
                }

                div {
                    class: "form-row",
                    Label { html_for: "profile-rp-password", "Repeat password" }
                    Input {
                        id: "profile-rp-password",
                        r#type: "password",
                        autocomplete: "new-password",
                        value: rp_password,
                        oninput: move |evt: FormEvent| form_state.write().rp_password = evt.value(),
                    }
                }

                div {
                    class: "form-row",
                    Label { html_for: "profile-photo", "Photo" }
                    div {
                        class: "photo-picker",
                        if let Some(src) = preview {
                            img { class: "photo-preview", src: "{src}", alt: "Photo preview" }
                        }
                        input {
                            id: "profile-photo",
                            r#type: "file",
                            accept: "image/*",
                            onchange: on_photo,
                        }
                    }
                }

                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| form_state.write().close(),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}
