pub mod auth;
pub mod browser;
pub mod router;
