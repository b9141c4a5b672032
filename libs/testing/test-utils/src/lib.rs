//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for the domain crates:
//! - `TestDatabase`: PostgreSQL container with automatic cleanup (feature: "postgres")
//! - `unique_name`: collision-free display names for test rows (always available)
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{unique_name, TestDatabase};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let name = unique_name("Soup");
//!     // Use db.pool() to build a unit of work factory
//! }
//! ```

use uuid::Uuid;

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Generate a display name that will not collide with other tests sharing a
/// database.
///
/// The result is the prefix followed by a 32-character hex UUID, so it stays
/// strictly alphanumeric and passes display name validation. Keep the prefix
/// at 18 characters or fewer; longer results would break the 50-character
/// name limit.
pub fn unique_name(prefix: &str) -> String {
    format!("{}{}", prefix, Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_names_do_not_collide() {
        assert_ne!(unique_name("Soup"), unique_name("Soup"));
    }

    #[test]
    fn test_unique_names_stay_alphanumeric_and_in_range() {
        let name = unique_name("Soup");

        assert!(name.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(name.len() <= 50);
    }
}
