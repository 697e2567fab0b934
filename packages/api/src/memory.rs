use std::sync::{Arc, Mutex};

use crate::error::ApiError;
use crate::models::{Profile, ProfileId, ProfileType, ProfileTypeId};
use crate::payload::ProfilePayload;
use crate::ProfileApi;

/// One request as received by [`MemoryApi`].
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    ListProfileTypes,
    ListProfiles,
    Create(ProfilePayload),
    Update(ProfileId, ProfilePayload),
    Delete(ProfileId),
}

impl ApiCall {
    /// Whether the call changes server state.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            ApiCall::Create(_) | ApiCall::Update(..) | ApiCall::Delete(_)
        )
    }
}

#[derive(Debug, Default)]
struct State {
    profiles: Vec<Profile>,
    types: Vec<ProfileType>,
    next_id: ProfileId,
    calls: Vec<ApiCall>,
    fail_next: Option<(u16, String)>,
}

/// In-memory ProfileApi that behaves like a small, strict server and records
/// every request it receives.
#[derive(Clone, Debug, Default)]
pub struct MemoryApi {
    state: Arc<Mutex<State>>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_types(self, types: Vec<ProfileType>) -> Self {
        self.state.lock().unwrap().types = types;
        self
    }

    pub fn with_profiles(self, profiles: Vec<Profile>) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.next_id = profiles.iter().map(|p| p.id).max().unwrap_or(0);
            state.profiles = profiles;
        }
        self
    }

    /// Make the next request fail with the given status and message.
    pub fn fail_next(&self, status: u16, message: &str) {
        self.state.lock().unwrap().fail_next = Some((status, message.to_string()));
    }

    /// Every request received so far, oldest first.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    /// Current server-side records.
    pub fn profiles(&self) -> Vec<Profile> {
        self.state.lock().unwrap().profiles.clone()
    }

    fn begin(&self, call: ApiCall) -> Result<std::sync::MutexGuard<'_, State>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match state.fail_next.take() {
            Some((status, message)) => Err(ApiError::Server { status, message }),
            None => Ok(state),
        }
    }
}

fn rejected(status: u16, message: &str) -> ApiError {
    ApiError::Server {
        status,
        message: message.to_string(),
    }
}

impl State {
    fn resolve_type(&self, raw: &str) -> Result<ProfileType, ApiError> {
        let id: ProfileTypeId = raw
            .parse()
            .map_err(|_| rejected(400, "Invalid profile type"))?;
        self.types
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| rejected(400, "Invalid profile type"))
    }

    fn username_taken(&self, username: &str, except: Option<ProfileId>) -> bool {
        self.profiles
            .iter()
            .any(|p| p.username == username && Some(p.id) != except)
    }
}

fn photo_url(payload: &ProfilePayload) -> Option<String> {
    payload
        .photo
        .as_ref()
        .map(|photo| format!("/uploads/{}", photo.file_name))
}

impl ProfileApi for MemoryApi {
    async fn list_profile_types(&self) -> Result<Vec<ProfileType>, ApiError> {
        let state = self.begin(ApiCall::ListProfileTypes)?;
        Ok(state.types.clone())
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>, ApiError> {
        let state = self.begin(ApiCall::ListProfiles)?;
        Ok(state.profiles.clone())
    }

    async fn create_profile(&self, payload: &ProfilePayload) -> Result<(), ApiError> {
        let mut state = self.begin(ApiCall::Create(payload.clone()))?;
        if payload.password.is_empty() || payload.password != payload.rp_password {
            return Err(rejected(400, "Password is required"));
        }
        if state.username_taken(&payload.username, None) {
            return Err(rejected(409, "Username already exists"));
        }
        let profile_type = state.resolve_type(&payload.profile_type_id)?;
        state.next_id += 1;
        let profile = Profile {
            id: state.next_id,
            username: payload.username.clone(),
            email: payload.email.clone(),
            photo: photo_url(payload),
            profile_type_id: Some(profile_type.id),
            profile_type: Some(profile_type),
        };
        state.profiles.push(profile);
        Ok(())
    }

    async fn update_profile(
        &self,
        id: ProfileId,
        payload: &ProfilePayload,
    ) -> Result<(), ApiError> {
        let mut state = self.begin(ApiCall::Update(id, payload.clone()))?;
        if payload.password != payload.rp_password {
            return Err(rejected(400, "Passwords do not match"));
        }
        if state.username_taken(&payload.username, Some(id)) {
            return Err(rejected(409, "Username already exists"));
        }
        let profile_type = state.resolve_type(&payload.profile_type_id)?;
        let photo = photo_url(payload);
        let profile = state
            .profiles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| rejected(404, "Profile not found"))?;
        profile.username = payload.username.clone();
        profile.email = payload.email.clone();
        profile.profile_type_id = Some(profile_type.id);
        profile.profile_type = Some(profile_type);
        if photo.is_some() {
            profile.photo = photo;
        }
        Ok(())
    }

    async fn delete_profile(&self, id: ProfileId) -> Result<(), ApiError> {
        let mut state = self.begin(ApiCall::Delete(id))?;
        let before = state.profiles.len();
        state.profiles.retain(|p| p.id != id);
        if state.profiles.len() == before {
            return Err(rejected(404, "Profile not found"));
        }
        Ok(())
    }
}
