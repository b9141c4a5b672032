//! Database library providing the PostgreSQL connector and pool utilities
//!
//! Connection settings load from the environment through
//! `core_config::FromEnv`; the connector hands back a plain `sqlx::PgPool`
//! so callers stay in control of checkout, transactions, and release.
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//!
//! let config = PostgresConfig::from_env()?;
//! let pool = postgres::connect(&config).await?;
//! postgres::run_migrations(&pool, &MIGRATOR, "my_app").await?;
//! ```

pub mod postgres;
