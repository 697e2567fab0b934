//! Data models exchanged with the profile API.

mod profile;

pub use profile::{Profile, ProfileId, ProfileType, ProfileTypeId};
