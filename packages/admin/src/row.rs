//! Per-row delete confirmation.
//!
//! Deleting is two-phase. [`DeletePrompt::request`] only opens the prompt;
//! [`DeletePrompt::confirm`] dismisses it and hands out a [`ConfirmedDelete`], which is
//! the only way to reach `DELETE profiles/{id}`. Either way the prompt ends up
//! dismissed, and a failed delete is not retried.

use api::{ProfileApi, ProfileId};

use crate::notice::Notifier;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletePrompt {
    target: Option<ProfileId>,
}

impl DeletePrompt {
    /// Ask for confirmation before deleting `id`.
    pub fn request(&mut self, id: ProfileId) {
        self.target = Some(id);
    }

    pub fn cancel(&mut self) {
        self.target = None;
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<ProfileId> {
        self.target
    }

    /// Dismiss the prompt and return the delete it was guarding, if any.
    pub fn confirm(&mut self) -> Option<ConfirmedDelete> {
        self.target.take().map(|id| ConfirmedDelete { id })
    }
}

/// A delete the user has explicitly confirmed.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a confirmed delete does nothing until executed"]
pub struct ConfirmedDelete {
    id: ProfileId,
}

impl ConfirmedDelete {
    pub fn id(&self) -> ProfileId {
        self.id
    }

    /// Issue the delete. Returns `true` when the caller should refresh the list.
    pub async fn execute<A: ProfileApi>(self, api: &A, notifier: &mut impl Notifier) -> bool {
        match api.delete_profile(self.id).await {
            Ok(()) => {
                tracing::info!(id = self.id, "profile deleted");
                notifier.success("Profile deleted");
                true
            }
            Err(e) => {
                let message = match e.status() {
                    Some(_) => e.user_message(),
                    None => "Profile could not be deleted".to_string(),
                };
                notifier.error(&message);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::{NoticeBoard, NoticeLevel};
    use api::{ApiCall, MemoryApi, Profile};

    fn api_with_one() -> MemoryApi {
        MemoryApi::new().with_profiles(vec![Profile {
            id: 7,
            username: "carol".into(),
            email: "c@x.com".into(),
            photo: None,
            profile_type_id: Some(1),
            profile_type: None,
        }])
    }

    #[test]
    fn test_request_and_cancel() {
        let mut prompt = DeletePrompt::default();
        assert!(!prompt.is_open());
        prompt.request(7);
        assert_eq!(prompt.target(), Some(7));
        prompt.cancel();
        assert!(!prompt.is_open());
        assert_eq!(prompt.confirm(), None);
    }

    #[tokio::test]
    async fn test_no_delete_without_confirmation() {
        let api = api_with_one();
        let mut prompt = DeletePrompt::default();
        prompt.request(7);
        assert!(api.calls().is_empty());

        let mut board = NoticeBoard::new();
        let confirmed = prompt.confirm().unwrap();
        assert!(!prompt.is_open());
        assert!(confirmed.execute(&api, &mut board).await);
        assert_eq!(api.calls(), vec![ApiCall::Delete(7)]);
        assert_eq!(board.messages(NoticeLevel::Success), vec!["Profile deleted"]);
        assert!(api.profiles().is_empty());
    }

    #[tokio::test]
    async fn test_failed_delete_reports_and_stays_dismissed() {
        let api = api_with_one();
        api.fail_next(403, "Profile is in use");
        let mut board = NoticeBoard::new();
        let mut prompt = DeletePrompt::default();
        prompt.request(7);

        assert!(!prompt.confirm().unwrap().execute(&api, &mut board).await);
        assert!(!prompt.is_open());
        assert_eq!(board.messages(NoticeLevel::Error), vec!["Profile is in use"]);
        assert_eq!(api.calls(), vec![ApiCall::Delete(7)]);
    }
}
