//! Utilities and helpers for the HTTP layer.
//!
//! - [`errors`]: the `AppError` type and the `{"message": ..., "data": null}`
//!   error envelope every failed request renders
//! - [`extractors`]: custom extractors (integer path id)
//! - [`server`]: router assembly, health endpoint, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{AppError, ErrorBody};
pub use extractors::IdPath;
pub use server::{create_app, create_router, health_router, shutdown_signal};
