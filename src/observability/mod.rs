//! Observability subsystem.
//!
//! Structured `tracing` events only. Every request runs inside a span that
//! carries a generated request ID so the events of one relay can be grouped.

pub mod logging;

pub use logging::init_logging;
