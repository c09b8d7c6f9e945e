//! In-memory store implementations
//!
//! All state lives for the process lifetime only; a restart discards every
//! pending session and issued token.

mod memory;

pub use memory::{MemorySessionStore, MemoryTokenStore};
