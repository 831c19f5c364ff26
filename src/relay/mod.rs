//! Relay subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request (path, host, query)
//!     → route.rs (exact-path decision, platform host check)
//!     → handler.rs (execute decision)
//!         /read/              → upstream.rs fetch(target)
//!         / /favicon.ico ...  → 204
//!         platform host       → 404 "Not Found"
//!         custom host         → upstream.rs forward(origin)
//!     → error.rs (any failure → logged, plain-text 500)
//! ```
//!
//! Each invocation is independent; nothing is shared across requests except
//! the immutable route table and the pooled clients.

pub mod error;
pub mod handler;
pub mod route;
pub mod upstream;

pub use error::{RelayError, SetupError};
pub use handler::RelayHandler;
pub use route::Route;
