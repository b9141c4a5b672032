//! In-memory implementation of the unit of work stack (for development/testing)

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ExampleError, ExampleResult};
use crate::mapper::{self, ExampleRow};
use crate::models::Example;
use crate::repository::ExampleRepository;
use crate::unit_of_work::{UnitOfWork, UnitOfWorkFactory};
use crate::values::{DisplayName, UniqueId};

/// Shared backing store for the in-memory stack.
///
/// Rows live in a map keyed by id, in the same row shape Postgres returns.
/// Commit and rollback totals are tallied so orchestration tests can assert
/// on transaction outcomes. Transactions are not simulated beyond the state
/// checks: every repository failure happens before any mutation, so a
/// rolled-back attempt leaves the map untouched.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rows: RwLock<HashMap<Uuid, ExampleRow>>,
    commits: AtomicUsize,
    rollbacks: AtomicUsize,
}

impl InMemoryStore {
    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    pub fn rollback_count(&self) -> usize {
        self.rollbacks.load(Ordering::SeqCst)
    }

    pub async fn row_count(&self) -> usize {
        self.rows.read().await.len()
    }
}

/// In-memory implementation of [`ExampleRepository`] over the shared store.
///
/// Mirrors the Postgres contract: ids come from the store, not the caller;
/// name uniqueness counts soft-deleted rows; deletion only sets the marker.
#[derive(Debug)]
pub struct InMemoryExampleRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl ExampleRepository for InMemoryExampleRepository {
    async fn create(&mut self, example: &Example) -> ExampleResult<Example> {
        let mut rows = self.store.rows.write().await;

        let name = example.name().value();
        if rows.values().any(|row| row.name == name) {
            return Err(ExampleError::NameUsed);
        }

        let row = ExampleRow {
            id: Uuid::new_v4(),
            name: name.to_string(),
            date_created: Utc::now(),
            date_deleted: None,
        };
        let persisted = mapper::db_to_domain(&row)?;
        rows.insert(row.id, row);

        Ok(persisted)
    }

    async fn read(&mut self, id: &UniqueId) -> ExampleResult<Example> {
        let rows = self.store.rows.read().await;
        let row = rows.get(&id.value()).ok_or(ExampleError::ExampleRead)?;

        mapper::db_to_domain(row)
    }

    async fn update(
        &mut self,
        id: &UniqueId,
        name: Option<DisplayName>,
    ) -> ExampleResult<Example> {
        let mut rows = self.store.rows.write().await;

        if let Some(name) = &name {
            let taken = rows
                .iter()
                .any(|(row_id, row)| *row_id != id.value() && row.name == name.value());
            if taken {
                return Err(ExampleError::NameUsed);
            }
        }

        let row = rows
            .get_mut(&id.value())
            .ok_or(ExampleError::ExampleUpdate)?;
        if let Some(name) = name {
            row.name = name.value().to_string();
        }

        mapper::db_to_domain(row)
    }

    async fn delete(&mut self, id: &UniqueId) -> ExampleResult<Example> {
        let mut rows = self.store.rows.write().await;

        let row = rows
            .get_mut(&id.value())
            .ok_or(ExampleError::ExampleDelete)?;
        row.date_deleted = Some(Utc::now());

        mapper::db_to_domain(row)
    }
}

/// In-memory implementation of [`UnitOfWork`].
///
/// There is no real connection to check out, but the state machine is the
/// same one the Postgres build enforces, so tests exercising the lifecycle
/// see identical behavior.
#[derive(Debug)]
pub struct InMemoryUnitOfWork {
    store: Arc<InMemoryStore>,
    connected: bool,
    repo: Option<InMemoryExampleRepository>,
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn connect(&mut self) -> ExampleResult<()> {
        self.connected = true;
        Ok(())
    }

    async fn begin(&mut self) -> ExampleResult<()> {
        if !self.connected {
            return Err(ExampleError::UowClient);
        }
        Ok(())
    }

    async fn commit(&mut self) -> ExampleResult<()> {
        if !self.connected {
            return Err(ExampleError::UowClient);
        }

        self.store.commits.fetch_add(1, Ordering::SeqCst);
        self.connected = false;
        self.repo = None;
        Ok(())
    }

    async fn rollback(&mut self) -> ExampleResult<()> {
        if !self.connected {
            return Ok(());
        }

        self.store.rollbacks.fetch_add(1, Ordering::SeqCst);
        self.connected = false;
        self.repo = None;
        Ok(())
    }

    fn examples(&mut self) -> ExampleResult<&mut dyn ExampleRepository> {
        if !self.connected && self.repo.is_none() {
            return Err(ExampleError::UowClient);
        }

        let repo = self.repo.get_or_insert_with(|| InMemoryExampleRepository {
            store: Arc::clone(&self.store),
        });
        Ok(repo)
    }
}

/// Factory handing out in-memory units of work over one shared store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUnitOfWorkFactory {
    store: Arc<InMemoryStore>,
}

impl InMemoryUnitOfWorkFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared store, for assertions on rows and transaction tallies.
    pub fn store(&self) -> Arc<InMemoryStore> {
        Arc::clone(&self.store)
    }
}

impl UnitOfWorkFactory for InMemoryUnitOfWorkFactory {
    type Uow = InMemoryUnitOfWork;

    fn unit_of_work(&self) -> InMemoryUnitOfWork {
        InMemoryUnitOfWork {
            store: Arc::clone(&self.store),
            connected: false,
            repo: None,
        }
    }
}
