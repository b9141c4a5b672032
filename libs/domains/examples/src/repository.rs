use async_trait::async_trait;

use crate::error::ExampleResult;
use crate::models::Example;
use crate::values::{DisplayName, UniqueId};

/// Repository trait for example persistence.
///
/// An implementation is bound to the single connection its owning unit of
/// work checked out, which is why methods take `&mut self`: every call runs
/// on that connection and therefore inside the caller's transaction.
/// Implementations never acquire connections of their own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExampleRepository: Send {
    /// Insert a new example.
    ///
    /// Fails with `NAME_USED` when any row (deleted ones included) already
    /// holds the name. The returned entity carries the id and creation
    /// timestamp the database assigned.
    async fn create(&mut self, example: &Example) -> ExampleResult<Example>;

    /// Fetch one example by id. Fails with `EXAMPLE_READ` when no row
    /// matches; soft-deleted examples are still readable.
    async fn read(&mut self, id: &UniqueId) -> ExampleResult<Example>;

    /// Update an example's name. `None` leaves the stored name untouched.
    ///
    /// Fails with `NAME_USED` when a different row holds the new name, and
    /// with `EXAMPLE_UPDATE` when no row matches the id.
    async fn update(&mut self, id: &UniqueId, name: Option<DisplayName>) -> ExampleResult<Example>;

    /// Soft-delete one example by setting its deletion marker. Fails with
    /// `EXAMPLE_DELETE` when no row matches. Deleting an already-deleted
    /// example refreshes the marker.
    async fn delete(&mut self, id: &UniqueId) -> ExampleResult<Example>;
}
