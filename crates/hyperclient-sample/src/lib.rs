//! # Hyperclient Sample Library
//!
//! This library exposes the sample consumer of `hyperclient` for integration testing.
//!
//! - [`api`] - `ExampleApi`, a client sharing one configuration across instances
//! - [`error`] - `SampleError`, the binary's top-level error
//! - [`fixture`] - an in-memory resource and factory standing in for the HTTP layer
//! - [`settings`] - environment-driven configuration

pub mod api;
pub mod error;
pub mod fixture;
pub mod settings;
