//! Match prediction HTTP service.
//!
//! Thin axum binding over `matchcast_rust_core`: the store and model are
//! loaded once at startup and shared immutably; handlers only read.

pub mod config;
pub mod routes;

pub use config::Config;
pub use routes::{build_router, AppState};
