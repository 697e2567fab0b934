//! # Profile form: create and edit in one controller
//!
//! [`ProfileForm`] holds everything the create/edit modal shows: the editable text
//! fields, the selected profile type, an optional photo with its preview, the list
//! of available types, and whether the form is visible.
//!
//! ## Lifecycle
//!
//! | Step | Method |
//! |------|--------|
//! | open blank | [`ProfileForm::open_create`] |
//! | open pre-filled | [`ProfileForm::open_edit`] (password fields always start empty) |
//! | type list arrives | [`ProfileForm::apply_types`] / [`ProfileForm::load_types`] |
//! | file picked | [`ProfileForm::select_photo`] |
//! | submit | [`ProfileForm::save`] |
//! | dismiss | [`ProfileForm::close`] |
//!
//! [`ProfileForm::save`] never mutates the form. On success the caller refreshes the
//! list once and closes the form; on failure the form stays as it is so the user can
//! correct it. This keeps the controller usable from a UI that only holds short
//! borrows of its state across an `.await`.

use api::{
    ApiError, PhotoUpload, Profile, ProfileApi, ProfileId, ProfilePayload, ProfileType,
};
use thiserror::Error;

use crate::notice::Notifier;
use crate::photo;
use crate::validation::{
    check_identity, check_new_password, check_password_change, check_profile_type,
    ValidationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(ProfileId),
}

/// Why a submission did not go through.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Rejected(#[from] ApiError),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub rp_password: String,
    /// Selected type id as shown in the selector; empty means none.
    pub profile_type_id: String,
    mode: FormMode,
    visible: bool,
    photo: Option<PhotoUpload>,
    photo_preview: String,
    types: Vec<ProfileType>,
}

impl ProfileForm {
    /// A visible, blank form for a new profile.
    pub fn open_create() -> Self {
        Self {
            visible: true,
            ..Self::default()
        }
    }

    /// A visible form pre-filled from an existing profile.
    pub fn open_edit(profile: &Profile) -> Self {
        Self {
            username: profile.username.clone(),
            email: profile.email.clone(),
            profile_type_id: profile
                .profile_type_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            photo_preview: profile.photo_url().unwrap_or_default().to_string(),
            mode: FormMode::Edit(profile.id),
            visible: true,
            ..Self::default()
        }
    }

    /// Open for `profile` when given, blank otherwise.
    pub fn open_for(profile: Option<&Profile>) -> Self {
        match profile {
            Some(profile) => Self::open_edit(profile),
            None => Self::open_create(),
        }
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "New profile",
            FormMode::Edit(_) => "Edit profile",
        }
    }

    pub fn types(&self) -> &[ProfileType] {
        &self.types
    }

    pub fn photo(&self) -> Option<&PhotoUpload> {
        self.photo.as_ref()
    }

    /// Data URL of a freshly picked file, or the stored photo URL, or empty.
    pub fn photo_preview(&self) -> &str {
        &self.photo_preview
    }

    /// Store the fetched type list.
    ///
    /// A new profile defaults to the first type when nothing is selected yet. A failed
    /// fetch leaves the previous list and reports through `notifier`.
    pub fn apply_types(
        &mut self,
        result: Result<Vec<ProfileType>, ApiError>,
        notifier: &mut impl Notifier,
    ) {
        match result {
            Ok(types) => {
                if self.mode == FormMode::Create && self.profile_type_id.is_empty() {
                    if let Some(first) = types.first() {
                        self.profile_type_id = first.id.to_string();
                    }
                }
                self.types = types;
            }
            Err(e) => {
                notifier.error(&format!(
                    "Profile types could not be loaded: {}",
                    e.user_message()
                ));
            }
        }
    }

    /// Fetch the type list and apply it.
    pub async fn load_types<A: ProfileApi>(&mut self, api: &A, notifier: &mut impl Notifier) {
        let result = api.list_profile_types().await;
        self.apply_types(result, notifier);
    }

    /// Keep a picked image for upload and render its preview.
    ///
    /// A file the browser reports without a type is accepted when its extension
    /// names an image format.
    pub fn select_photo(&mut self, mut upload: PhotoUpload) -> Result<(), ValidationError> {
        if upload.content_type.trim().is_empty() {
            upload.content_type = photo::guess_content_type(&upload.file_name)
                .unwrap_or_default()
                .to_string();
        }
        if !photo::is_image(&upload.content_type) {
            return Err(ValidationError::NotAnImage);
        }
        self.photo_preview = photo::data_url(&upload);
        self.photo = Some(upload);
        Ok(())
    }

    /// Validate and build the multipart body.
    pub fn payload(&self) -> Result<ProfilePayload, ValidationError> {
        check_identity(&self.username, &self.email)?;
        check_profile_type(&self.profile_type_id)?;
        let change = match self.mode {
            FormMode::Create => check_new_password(&self.password, &self.rp_password)?,
            FormMode::Edit(_) => check_password_change(&self.password, &self.rp_password)?,
        };
        let (password, rp_password) = change.wire_values();

        Ok(ProfilePayload {
            username: self.username.clone(),
            email: self.email.clone(),
            profile_type_id: self.profile_type_id.clone(),
            password,
            rp_password,
            photo: self.photo.clone(),
        })
    }

    /// Validate, then create or update.
    ///
    /// Every outcome is reported through `notifier`. Validation failures never reach
    /// `api`.
    pub async fn save<A: ProfileApi>(
        &self,
        api: &A,
        notifier: &mut impl Notifier,
    ) -> Result<(), SaveError> {
        let payload = match self.payload() {
            Ok(payload) => payload,
            Err(e) => {
                notifier.error(&e.to_string());
                return Err(e.into());
            }
        };

        let (result, done) = match self.mode {
            FormMode::Create => (api.create_profile(&payload).await, "Profile created"),
            FormMode::Edit(id) => (api.update_profile(id, &payload).await, "Profile updated"),
        };

        match result {
            Ok(()) => {
                tracing::info!(mode = ?self.mode, username = %payload.username, "{done}");
                notifier.success(done);
                Ok(())
            }
            Err(e) => {
                notifier.error(&e.user_message());
                Err(e.into())
            }
        }
    }
}
