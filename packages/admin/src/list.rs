//! The profile table's data: a full replacement of the server collection on every
//! refresh, never a merge.

use api::{ApiError, Profile, ProfileApi, ProfileId};

use crate::notice::Notifier;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileList {
    profiles: Vec<Profile>,
    fetched: bool,
}

impl ProfileList {
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn get(&self, id: ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// True until the first fetch has completed, successfully or not.
    pub fn is_loading(&self) -> bool {
        !self.fetched
    }

    /// Apply the outcome of `GET profiles`.
    ///
    /// On failure the previously displayed rows stay in place. Returns whether the
    /// list was replaced.
    pub fn apply(
        &mut self,
        result: Result<Vec<Profile>, ApiError>,
        notifier: &mut impl Notifier,
    ) -> bool {
        self.fetched = true;
        match result {
            Ok(profiles) => {
                tracing::debug!(count = profiles.len(), "profiles refreshed");
                self.profiles = profiles;
                true
            }
            Err(e) => {
                notifier.error(&format!("Profiles could not be loaded: {}", e.user_message()));
                false
            }
        }
    }

    /// Fetch the whole collection and apply it.
    pub async fn refresh<A: ProfileApi>(&mut self, api: &A, notifier: &mut impl Notifier) -> bool {
        let result = api.list_profiles().await;
        self.apply(result, notifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::{NoticeBoard, NoticeLevel};
    use api::{ApiCall, MemoryApi};

    fn profile(id: ProfileId, username: &str) -> Profile {
        Profile {
            id,
            username: username.into(),
            email: format!("{username}@x.com"),
            photo: None,
            profile_type_id: Some(1),
            profile_type: None,
        }
    }

    #[tokio::test]
    async fn test_refresh_replaces_everything() {
        let api = MemoryApi::new().with_profiles(vec![profile(1, "alice"), profile(2, "bob")]);
        let mut board = NoticeBoard::new();
        let mut list = ProfileList::default();
        assert!(list.is_loading());

        assert!(list.refresh(&api, &mut board).await);
        assert!(!list.is_loading());
        assert_eq!(list.profiles().len(), 2);
        assert_eq!(list.get(2).unwrap().username, "bob");

        api.delete_profile(1).await.unwrap();
        list.refresh(&api, &mut board).await;
        assert_eq!(list.profiles(), &[profile(2, "bob")]);
        assert!(board.is_empty());
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_stale_rows() {
        let api = MemoryApi::new().with_profiles(vec![profile(1, "alice")]);
        let mut board = NoticeBoard::new();
        let mut list = ProfileList::default();
        list.refresh(&api, &mut board).await;

        api.fail_next(500, "database down");
        assert!(!list.refresh(&api, &mut board).await);
        assert_eq!(list.profiles(), &[profile(1, "alice")]);
        assert_eq!(
            board.messages(NoticeLevel::Error),
            vec!["Profiles could not be loaded: database down"]
        );
        assert_eq!(api.calls(), vec![ApiCall::ListProfiles, ApiCall::ListProfiles]);
    }

    #[test]
    fn test_first_failure_ends_loading() {
        let mut board = NoticeBoard::new();
        let mut list = ProfileList::default();
        list.apply(
            Err(ApiError::Server { status: 502, message: "Bad gateway".into() }),
            &mut board,
        );
        assert!(!list.is_loading());
        assert!(list.is_empty());
    }
}
