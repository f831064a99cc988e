pub mod auth;
pub mod stages;
pub mod users;
