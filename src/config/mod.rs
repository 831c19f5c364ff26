//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → CLI overrides applied in main.rs
//! ```
//!
//! Config is read once at startup; there is no reload.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    ListenerConfig, ObservabilityConfig, OriginConfig, RelayConfig, RouteTableConfig,
    TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
