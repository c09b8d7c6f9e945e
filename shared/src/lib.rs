//! Shared utilities and configuration for the FolioGate backend
//!
//! This crate provides common functionality used across all server modules:
//! - Environment-driven configuration types
//! - Utility functions (phone validation and masking)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{ServerConfig, SmsConfig};
pub use utils::phone;
