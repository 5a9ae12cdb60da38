//! # Tunegate Web
//!
//! HTTP surface of the tunegate gateway: configuration, routes and server
//! bootstrap. Handlers are thin; all behaviour lives in `tunegate-core`.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Flags and environment fallbacks |
//! | [`error`] | Error envelope rendering, startup errors |
//! | [`routes`] | axum handlers and router |
//! | [`server`] | Listener bootstrap |

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use config::{ServerArgs, ServerConfig};
pub use error::{ApiError, ServerError};
pub use routes::{router, AppState};
pub use server::ApiServer;
