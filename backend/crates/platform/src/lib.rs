//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Cookie header building and parsing
//! - HMAC-SHA256 signing for tamper-evident cookie values

pub mod cookie;
pub mod crypto;
