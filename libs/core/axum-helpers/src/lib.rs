//! Shared axum infrastructure for HTTP apps.
//!
//! Provides server bootstrap with graceful shutdown, the standard
//! /health liveness router and a JSON 404 fallback so every app in the
//! workspace serves the same envelope for unknown routes.

pub mod handlers;
pub mod health;
pub mod server;
pub mod shutdown;

pub use handlers::not_found;
pub use health::{health_router, HealthResponse};
pub use server::create_app;
pub use shutdown::shutdown_signal;
