//! Infrastructure Layer
//!
//! Storage and cookie-store implementations.

pub mod cookie_store;
pub mod memory;
pub mod postgres;

pub use cookie_store::SignedCookieStore;
pub use memory::MemoryUserRepository;
pub use postgres::PgUserRepository;
