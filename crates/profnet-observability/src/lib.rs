//! # profnet-observability
//!
//! Tracing subscriber setup and the span definitions used by the network
//! layer.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_filter};
