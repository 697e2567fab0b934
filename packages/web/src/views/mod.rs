mod profiles;
pub use profiles::Profiles;

mod not_found;
pub use not_found::NotFound;
