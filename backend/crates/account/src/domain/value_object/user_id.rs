//! UserId Value Object
//!
//! Storage-assigned integer identifier. `0` means "not assigned yet".

use derive_more::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct UserId(i64);

impl UserId {
    /// Placeholder for a user that has not been persisted
    pub const UNSET: UserId = UserId(0);

    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Whether storage has assigned this id
    #[inline]
    pub const fn is_set(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset() {
        assert!(!UserId::UNSET.is_set());
        assert!(!UserId::default().is_set());
        assert!(UserId::new(1).is_set());
    }

    #[test]
    fn test_display_and_get() {
        let id = UserId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn test_ordering_follows_creation() {
        assert!(UserId::new(1) < UserId::new(2));
    }
}
