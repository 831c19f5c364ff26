//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! signals.rs: Ctrl+C / SIGTERM
//!     → Shutdown::trigger
//!     → HttpServer::run stops accepting, drains in-flight requests, returns
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
