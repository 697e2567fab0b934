//! # API crate: the profile service as seen from the admin client
//!
//! Everything the admin UI knows about the remote profile service lives here. The
//! client holds no authoritative state: every operation is a round-trip to the
//! server, and the UI refetches the list after each mutation.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`client`] | - | [`HttpApi`], the `reqwest` implementation of [`ProfileApi`] |
//! | [`config`] | - | [`ApiConfig`] (`admin.toml` + `PROFILE_API_URL`) |
//! | [`error`] | - | [`ApiError`] and server error-body parsing |
//! | [`memory`] | `memory` | [`MemoryApi`], an in-process fake server for tests |
//! | [`models`] | - | [`Profile`] and [`ProfileType`] as they appear on the wire |
//! | [`payload`] | - | [`ProfilePayload`], the multipart create/update body |
//!
//! ## The [`ProfileApi`] trait
//!
//! Five async operations mirroring the server's endpoints. Controllers in the `admin`
//! crate are generic over it so the same validation and submission logic runs against
//! the real server in the browser and against [`MemoryApi`] in tests.

use std::future::Future;

pub mod client;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod models;
pub mod payload;

pub use client::HttpApi;
pub use config::ApiConfig;
pub use error::ApiError;
#[cfg(any(test, feature = "memory"))]
pub use memory::{ApiCall, MemoryApi};
pub use models::{Profile, ProfileId, ProfileType, ProfileTypeId};
pub use payload::{PhotoUpload, ProfilePayload};

/// Async interface to the profile service.
pub trait ProfileApi {
    /// `GET profileTypes`
    fn list_profile_types(
        &self,
    ) -> impl Future<Output = Result<Vec<ProfileType>, ApiError>>;

    /// `GET profiles`
    fn list_profiles(&self) -> impl Future<Output = Result<Vec<Profile>, ApiError>>;

    /// `POST profiles`
    fn create_profile(
        &self,
        payload: &ProfilePayload,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// `PATCH profiles/{id}`
    fn update_profile(
        &self,
        id: ProfileId,
        payload: &ProfilePayload,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// `DELETE profiles/{id}`
    fn delete_profile(&self, id: ProfileId) -> impl Future<Output = Result<(), ApiError>>;
}
