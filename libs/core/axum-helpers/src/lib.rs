//! # Axum Helpers
//!
//! Shared utilities for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`responder`]**: the response envelope plus the success/fail/error
//!   renderers and the unmatched-route fallback
//! - **[`server`]**: server startup and graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::{responder, server::create_app};
//! use core_config::server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let router = Router::new().fallback(responder::not_found);
//!     let config = ServerConfig::new("0.0.0.0".to_string(), 8080);
//!     create_app(router, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod responder;
pub mod server;

// Re-export responder surface
pub use responder::{Envelope, GENERIC_ERROR_MESSAGE, LASTSTOP_404_CODE, not_found};

// Re-export server helpers
pub use server::{create_app, shutdown_signal};
