use async_trait::async_trait;

use crate::error::ExampleResult;
use crate::repository::ExampleRepository;

/// Transaction lifecycle around exactly one repository operation.
///
/// The intended sequence is `connect`, `begin`, one repository call through
/// [`UnitOfWork::examples`], then `commit` on success or `rollback` on
/// failure. `begin`, `commit`, and `examples` fail with `UOW_CLIENT` before
/// a connection exists; `rollback` is deliberately a no-op in that state so
/// failure handlers can call it unconditionally, whether the attempt died
/// before or after checkout. Commit and rollback both release the
/// connection, after which the unit of work is spent and should be dropped.
#[async_trait]
pub trait UnitOfWork: Send {
    /// Check one connection out of the pool.
    async fn connect(&mut self) -> ExampleResult<()>;

    /// Open a transaction on the checked-out connection.
    async fn begin(&mut self) -> ExampleResult<()>;

    /// Commit the transaction and release the connection.
    async fn commit(&mut self) -> ExampleResult<()>;

    /// Roll back and release the connection; a no-op when none was ever
    /// checked out.
    async fn rollback(&mut self) -> ExampleResult<()>;

    /// The examples repository bound to the current connection.
    ///
    /// Built lazily on first access; repeated calls hand back the same
    /// instance. Fails with `UOW_CLIENT` before `connect`.
    fn examples(&mut self) -> ExampleResult<&mut dyn ExampleRepository>;
}

/// Hands out a fresh [`UnitOfWork`] per logical operation.
///
/// Services hold a factory instead of a connection, so each use case gets
/// its own short-lived transactional scope. The factory is the composition
/// seam: production wires in Postgres, tests wire in the in-memory build.
pub trait UnitOfWorkFactory: Send + Sync {
    type Uow: UnitOfWork + 'static;

    fn unit_of_work(&self) -> Self::Uow;
}
