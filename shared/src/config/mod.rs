//! Configuration module
//!
//! Configuration is organized into logical areas:
//! - `server` - HTTP server binding and CORS settings
//! - `sms` - SMS delivery provider settings

pub mod server;
pub mod sms;

// Re-export commonly used types
pub use server::ServerConfig;
pub use sms::SmsConfig;
