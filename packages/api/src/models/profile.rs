//! # Profile records as the remote API returns them
//!
//! ## [`Profile`]
//!
//! One managed record. Field names are camelCase on the wire (`profileTypeId`,
//! `profileType`). The `password` column the server may echo back is never
//! deserialized: passwords are write-only from the client's point of view and
//! only ever travel outwards inside a [`crate::ProfilePayload`].
//!
//! `photo` is a URL (or server-relative path) to an already uploaded image. Servers
//! differ in how they represent "no photo" (`null`, missing, or `""`), so
//! [`Profile::photo_url`] folds all three into `None`.
//!
//! ## [`ProfileType`]
//!
//! Read-only reference data used to populate the type selector. The list view shows
//! the expanded `profileType.name` when the server includes it.

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a [`Profile`].
pub type ProfileId = i64;

/// Identifier of a [`ProfileType`].
pub type ProfileTypeId = i64;

/// A profile record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub photo: Option<String>,
    /// Foreign key to the profile type. Optional on the wire so that a record with a
    /// dangling or missing type still renders.
    #[serde(default)]
    pub profile_type_id: Option<ProfileTypeId>,
    /// Expanded relation, present when the server joins it.
    #[serde(default)]
    pub profile_type: Option<ProfileType>,
}

impl Profile {
    /// The photo URL, if the record has a non-empty one.
    pub fn photo_url(&self) -> Option<&str> {
        self.photo.as_deref().filter(|p| !p.trim().is_empty())
    }

    /// Name of the expanded profile type, or an empty string.
    pub fn type_name(&self) -> &str {
        self.profile_type
            .as_ref()
            .map(|t| t.name.as_str())
            .unwrap_or_default()
    }
}

/// A category a profile belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileType {
    pub id: ProfileTypeId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_server_json() {
        let json = r#"{
            "id": 5,
            "username": "alice",
            "email": "a@x.com",
            "password": "$argon2id$v=19$...",
            "photo": "/uploads/alice.png",
            "profileTypeId": 1,
            "profileType": { "id": 1, "name": "Admin" }
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, 5);
        assert_eq!(profile.profile_type_id, Some(1));
        assert_eq!(profile.type_name(), "Admin");
        assert_eq!(profile.photo_url(), Some("/uploads/alice.png"));
    }

    #[test]
    fn test_profile_without_relation_or_photo() {
        let json = r#"{"id": 2, "username": "bob", "email": "b@x.com", "photo": "", "profileTypeId": null}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.photo_url(), None);
        assert_eq!(profile.profile_type_id, None);
        assert_eq!(profile.type_name(), "");
    }

    #[test]
    fn test_password_never_serialized() {
        let profile = Profile {
            id: 1,
            username: "alice".into(),
            email: "a@x.com".into(),
            photo: None,
            profile_type_id: Some(1),
            profile_type: None,
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("\"profileTypeId\":1"));
    }
}
