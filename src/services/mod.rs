pub mod hashing;
pub mod request_log;
pub mod validation;
