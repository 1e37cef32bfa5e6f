//! Repository pattern implementation for database operations.
//!
//! Provides an abstraction over the `entregas` table so the HTTP layer can
//! run against either the production PostgreSQL implementation or an
//! in-memory mock.
//!
//! ## Key Components
//! - [`SmartPool`] - Connection pool with automatic test transaction support
//! - [`RepositoryError`] - Error types for repository operations
//! - [`DeliveryOperations`] - Trait defining all database operations
//! - [`Repository`] - PostgreSQL implementation

use async_trait::async_trait;
use chrono::NaiveDate;

pub mod error;
#[cfg(any(test, feature = "mocks"))]
pub mod mock;
pub mod pool;
pub mod postgres;

// Re-export main types for convenience
pub use error::{RepositoryError, RepositoryResult};
#[cfg(any(test, feature = "mocks"))]
pub use mock::MockRepository;
pub use pool::SmartPool;
pub use postgres::Repository;

use crate::models::{DeliveredFlag, Delivery};

/// Optional filters for delivery reads, already validated and typed.
///
/// Each present field contributes exactly one conjunctive clause to the
/// generated predicate; absent fields contribute nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryFilters {
    /// Lower bound (inclusive) on the issuance date
    pub start_date: Option<NaiveDate>,
    /// Upper bound (inclusive) on the issuance date
    pub end_date: Option<NaiveDate>,
    /// Point-of-sale identifier, matched against either candidate column
    pub pdv: Option<i32>,
    /// Delivered flag
    pub status: Option<DeliveredFlag>,
}

/// Main trait defining all delivery storage operations.
///
/// All methods are async and return `RepositoryResult<T>`. Implemented by
/// the production PostgreSQL [`Repository`] and the in-memory
/// [`MockRepository`].
#[async_trait]
pub trait DeliveryOperations: Send + Sync {
    /// Acquire and release a connection to verify the database is reachable.
    async fn ping(&self) -> RepositoryResult<()>;

    /// List deliveries matching the given filters, ordered by id.
    async fn list_deliveries(&self, filters: &DeliveryFilters) -> RepositoryResult<Vec<Delivery>>;

    /// Set the delivered flag and deliverer name on a single delivery.
    ///
    /// Returns the number of rows affected; zero means the id does not
    /// exist.
    async fn update_delivery_status(
        &self,
        id: i32,
        flag: DeliveredFlag,
        deliverer_name: &str,
    ) -> RepositoryResult<usize>;
}
