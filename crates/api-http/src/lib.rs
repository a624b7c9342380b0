//! HTTP/JSON API Layer
//!
//! Exposes venues, menus and the per-venue waiting queue over axum.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use handler::AppState;
pub use server::{build_router, HttpServer, HttpServerConfig, ServerHandle};
