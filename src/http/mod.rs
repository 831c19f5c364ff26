//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace span with request ID)
//!     → relay::RelayHandler::respond (deadline, route, fetch/forward, error boundary)
//!     → Send to client
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
