//! sea-orm entities for the accounts service.

pub mod user_profiles;
pub mod users;
