//! Examples Domain
//!
//! This module provides a complete domain implementation for managing examples,
//! built as a layered vertical slice with explicit transaction control.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, envelope rendering
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Service   │  ← Use case orchestration, outcome shaping
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │ Unit of Work│  ← Connection checkout, transaction lifecycle
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, value objects, DTOs
//! └─────────────┘
//! ```
//!
//! Every service call checks out one connection, wraps one repository
//! operation in a transaction, and concludes with commit or rollback. The
//! outcome is reported as a three-way response (success, fail, error) that
//! maps onto HTTP 200, 400, and 500.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_examples::{handlers, memory::InMemoryUnitOfWorkFactory, ExampleService};
//!
//! // Create a unit of work factory and the service over it
//! let factory = InMemoryUnitOfWorkFactory::new();
//! let service = ExampleService::new(factory);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod mapper;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod requests;
pub mod responses;
pub mod service;
pub mod unit_of_work;
pub mod values;

// Re-export commonly used types
pub use error::{ExampleError, ExampleResult};
pub use models::{Example, ExampleDto};
pub use postgres::{PgExampleRepository, PgUnitOfWork, PgUnitOfWorkFactory};
pub use repository::ExampleRepository;
pub use responses::{ExampleResponse, Outcome};
pub use service::ExampleService;
pub use unit_of_work::{UnitOfWork, UnitOfWorkFactory};
pub use values::{DisplayName, UniqueId};
