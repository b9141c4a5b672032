//! Exemplar API server assembly
//!
//! The binary in `main.rs` wires configuration, the Postgres pool, and the
//! examples domain into the router defined under [`api`]. The pieces are
//! exposed as a library so integration tests can assemble the same
//! application over the in-memory unit of work stack.

pub mod api;
pub mod config;
pub mod openapi;
