//! # HTTP implementation of [`ProfileApi`]
//!
//! [`HttpApi`] wraps a single [`reqwest::Client`] and a base URL. It compiles for both
//! `wasm32` (where reqwest drives the browser's `fetch`) and native targets.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`list_profile_types`](ProfileApi::list_profile_types) | `GET profileTypes` |
//! | [`list_profiles`](ProfileApi::list_profiles) | `GET profiles` |
//! | [`create_profile`](ProfileApi::create_profile) | `POST profiles` (multipart) |
//! | [`update_profile`](ProfileApi::update_profile) | `PATCH profiles/{id}` (multipart) |
//! | [`delete_profile`](ProfileApi::delete_profile) | `DELETE profiles/{id}` |
//!
//! Non-2xx responses become [`ApiError::Server`] carrying the message extracted by
//! [`server_message`]. Create and update ignore the response body: callers refetch
//! the list after every mutation anyway. No timeouts are configured beyond the
//! transport defaults.

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{server_message, ApiError};
use crate::models::{Profile, ProfileId, ProfileType};
use crate::payload::ProfilePayload;
use crate::ProfileApi;

/// Profile API client talking to a remote server.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    base_url: Url,
}

impl PartialEq for HttpApi {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url()?;
        let client = Client::builder().build()?;
        tracing::info!(%base_url, "profile API client ready");
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a request path against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(|e| ApiError::InvalidUrl {
            url: format!("{}{path}", self.base_url),
            reason: e.to_string(),
        })
    }

    /// Turn a server-provided reference (e.g. a photo path) into an absolute URL.
    ///
    /// Absolute URLs, including `data:` URLs, come back unchanged; references that
    /// cannot be resolved are returned as given.
    pub fn resolve(&self, reference: &str) -> String {
        self.base_url
            .join(reference)
            .map(String::from)
            .unwrap_or_else(|_| reference.to_string())
    }

    async fn send(&self, request: RequestBuilder, what: &str) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("{what}: {e}");
            ApiError::Transport(e)
        })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "{what}");
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = server_message(status.as_u16(), status.canonical_reason(), &body);
        tracing::warn!(status = status.as_u16(), %message, "{what} rejected");
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let response = self
            .send(self.client.get(url), &format!("GET {path}"))
            .await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("GET {path}: cannot decode body: {e}");
            ApiError::Decode(e)
        })
    }
}

fn profile_path(id: ProfileId) -> String {
    format!("profiles/{id}")
}

impl ProfileApi for HttpApi {
    async fn list_profile_types(&self) -> Result<Vec<ProfileType>, ApiError> {
        self.get_json("profileTypes").await
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>, ApiError> {
        self.get_json("profiles").await
    }

    async fn create_profile(&self, payload: &ProfilePayload) -> Result<(), ApiError> {
        let url = self.endpoint("profiles")?;
        let form = payload.to_form()?;
        self.send(self.client.post(url).multipart(form), "POST profiles")
            .await?;
        Ok(())
    }

    async fn update_profile(
        &self,
        id: ProfileId,
        payload: &ProfilePayload,
    ) -> Result<(), ApiError> {
        let path = profile_path(id);
        let url = self.endpoint(&path)?;
        let form = payload.to_form()?;
        self.send(self.client.patch(url).multipart(form), &format!("PATCH {path}"))
            .await?;
        Ok(())
    }

    async fn delete_profile(&self, id: ProfileId) -> Result<(), ApiError> {
        let path = profile_path(id);
        let url = self.endpoint(&path)?;
        self.send(self.client.delete(url), &format!("DELETE {path}"))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpApi {
        HttpApi::new(&ApiConfig::new(base)).unwrap()
    }

    #[test]
    fn test_endpoints_join_onto_base() {
        let api = api("http://localhost:3000/api");
        assert_eq!(
            api.endpoint("profiles").unwrap().as_str(),
            "http://localhost:3000/api/profiles"
        );
        assert_eq!(
            api.endpoint(&profile_path(5)).unwrap().as_str(),
            "http://localhost:3000/api/profiles/5"
        );
        assert_eq!(
            api.endpoint("profileTypes").unwrap().as_str(),
            "http://localhost:3000/api/profileTypes"
        );
    }

    #[test]
    fn test_resolve_photo_references() {
        let api = api("http://localhost:3000/api/");
        assert_eq!(
            api.resolve("/uploads/alice.png"),
            "http://localhost:3000/uploads/alice.png"
        );
        assert_eq!(
            api.resolve("https://cdn.test/a.png"),
            "https://cdn.test/a.png"
        );
        assert_eq!(
            api.resolve("data:image/gif;base64,R0lGODlh"),
            "data:image/gif;base64,R0lGODlh"
        );
    }

    #[test]
    fn test_clients_compare_by_base_url() {
        assert_eq!(api("http://a.test/"), api("http://a.test"));
        assert_ne!(api("http://a.test/"), api("http://b.test/"));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Port 9 (discard) on localhost is closed on any sane test machine.
        let api = api("http://127.0.0.1:9/");
        let err = api.list_profiles().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.user_message(), "Could not reach the server");
    }
}
