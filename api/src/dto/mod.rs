//! Request and response bodies for the HTTP surface

pub mod auth;
pub mod error;
