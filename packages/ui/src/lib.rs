//! Dioxus components for the profile admin screen.

use dioxus::prelude::*;

pub mod components;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const ADMIN_CSS: Asset = asset!("/assets/styling/admin.css");

mod api_context;
pub use api_context::{use_api, ApiProvider};

mod toaster;
pub use toaster::{use_toasts, ToastProvider, Toaster, Toasts};

mod profile_form;
pub use profile_form::ProfileFormModal;

mod profile_row;
pub use profile_row::ProfileRow;

mod profile_table;
pub use profile_table::ProfileTable;
