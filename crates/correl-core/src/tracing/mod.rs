//! Observability for correl.
//! `tracing` crate with `EnvFilter`, logs to stderr so stdout stays clean.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with_filter};
