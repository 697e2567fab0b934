//! # Admin crate: renderer-independent controllers for the profile screens
//!
//! The UI crate owns the widgets; this crate owns what they do. Each controller is a
//! plain struct the UI keeps in a signal, plus async operations generic over
//! [`api::ProfileApi`], so every rule here is testable against [`api::MemoryApi`]
//! without a browser.
//!
//! | Module | Controller | Purpose |
//! |--------|------------|---------|
//! | [`form`] | [`ProfileForm`] | create/edit field state, validation, multipart payload, submission |
//! | [`list`] | [`ProfileList`] | full-replacement refresh of the profile table, stale rows kept on failure |
//! | [`row`] | [`DeletePrompt`] | two-phase delete confirmation |
//! | [`notice`] | [`NoticeBoard`] | user-facing notices behind the [`Notifier`] trait |
//! | [`validation`] | - | ordered, fail-fast field and password rules |
//! | [`photo`] | - | image detection and data-URL previews |
//!
//! ## Refresh after mutation
//!
//! [`ProfileForm::save`] and [`ConfirmedDelete::execute`] report success to their
//! caller instead of touching the list themselves. The caller issues exactly one
//! [`ProfileList::refresh`] per successful mutation.

pub mod form;
pub mod list;
pub mod notice;
pub mod photo;
pub mod row;
pub mod validation;

pub use form::{FormMode, ProfileForm, SaveError};
pub use list::ProfileList;
pub use notice::{Notice, NoticeBoard, NoticeLevel, Notifier, MAX_NOTICES};
pub use row::{ConfirmedDelete, DeletePrompt};
pub use validation::{is_strong_password, PasswordChange, ValidationError};
