//! Outgoing create/update payloads.
//!
//! Both `POST profiles` and `PATCH profiles/{id}` take the same multipart body:
//! five text parts and an optional `photo` file part. [`ProfilePayload::text_fields`]
//! is the single source of truth for the text parts so the multipart form and the
//! in-memory API see exactly the same values.

use reqwest::multipart::{Form, Part};

use crate::error::ApiError;

/// An image picked in the form, held in memory until submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoUpload {
    pub file_name: String,
    /// MIME type, e.g. `image/png`.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Multipart body for creating or updating a profile.
///
/// `password` and `rp_password` are empty strings when an update should leave the
/// stored password untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePayload {
    pub username: String,
    pub email: String,
    pub profile_type_id: String,
    pub password: String,
    pub rp_password: String,
    pub photo: Option<PhotoUpload>,
}

impl ProfilePayload {
    /// Text parts in wire order.
    pub fn text_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("username", self.username.as_str()),
            ("email", self.email.as_str()),
            ("profileTypeId", self.profile_type_id.as_str()),
            ("password", self.password.as_str()),
            ("rpPassword", self.rp_password.as_str()),
        ]
    }

    /// Whether this payload asks the server to change the password.
    pub fn changes_password(&self) -> bool {
        !self.password.is_empty()
    }

    /// Build the `multipart/form-data` body.
    pub fn to_form(&self) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for (name, value) in self.text_fields() {
            form = form.text(name, value.to_string());
        }
        if let Some(photo) = &self.photo {
            let part = Part::bytes(photo.bytes.clone())
                .file_name(photo.file_name.clone())
                .mime_str(&photo.content_type)?;
            form = form.part("photo", part);
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ProfilePayload {
        ProfilePayload {
            username: "alice".into(),
            email: "a@x.com".into(),
            profile_type_id: "1".into(),
            password: String::new(),
            rp_password: String::new(),
            photo: None,
        }
    }

    #[test]
    fn test_text_fields_wire_names() {
        let names: Vec<_> = payload().text_fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            ["username", "email", "profileTypeId", "password", "rpPassword"]
        );
    }

    #[test]
    fn test_empty_password_means_unchanged() {
        let mut p = payload();
        assert!(!p.changes_password());
        p.password = "Abc123!@".into();
        p.rp_password = "Abc123!@".into();
        assert!(p.changes_password());
    }

    #[test]
    fn test_form_with_photo() {
        let mut p = payload();
        p.photo = Some(PhotoUpload {
            file_name: "me.png".into(),
            content_type: "image/png".into(),
            bytes: vec![0x89, b'P', b'N', b'G'],
        });
        assert!(p.to_form().is_ok());
    }

    #[test]
    fn test_form_rejects_malformed_mime() {
        let mut p = payload();
        p.photo = Some(PhotoUpload {
            file_name: "me.png".into(),
            content_type: "not a mime".into(),
            bytes: vec![],
        });
        assert!(p.to_form().is_err());
    }
}
