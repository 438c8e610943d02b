//! HTTP pipeline middleware.

pub mod auth;
pub mod https;
pub mod request_id;
pub mod roles;
