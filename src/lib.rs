//! Edge relay library.
//!
//! Relays `GET /read/?target=<url>` to the target from the relay's own
//! network position, answers housekeeping paths with 204, and passes
//! everything else to an origin server (or 404s when there is none).

pub mod client;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use relay::{RelayError, RelayHandler, SetupError};
