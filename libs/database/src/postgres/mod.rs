//! PostgreSQL database connector and utilities
//!
//! Provides connection management, migration running, and a checkout
//! watchdog for long-held pooled connections.

mod checkout;
mod config;
mod connector;

pub use checkout::{CHECKOUT_WARN_THRESHOLD, CheckoutWatchdog};
pub use config::PostgresConfig;
pub use connector::{connect, run_migrations};

// Re-export sqlx types callers need alongside the pool
pub use sqlx::Postgres;
pub use sqlx::pool::PoolConnection;
pub use sqlx::postgres::{PgConnection, PgPool, PgPoolOptions};
