//! # Observability & Tracing
//!
//! The client layer emits `tracing` events and spans; this module installs a
//! subscriber for binaries that want to see them.
//!
//! ## What Gets Traced
//!
//! - **Configuration**: entry point and auth scheme being set (`debug`)
//! - **Entry construction**: once per client, with the entry point as a span field (`info`)
//! - **Forwarded calls**: method name, arguments and whether a block was passed (`debug`)
//! - **Rejected calls**: methods the entry resource does not respond to (`warn`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Construction only
//! RUST_LOG=info cargo run
//!
//! # Every forwarded call with its arguments
//! RUST_LOG=debug cargo run
//!
//! # Only the client layer
//! RUST_LOG=hyperclient=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a forwarded call shows its hierarchy inline:
//!
//! ```text
//! INFO entry{entry_point=http://api.example.com}: Constructing entry resource
//! DEBUG dispatch{method=orders}: Forwarding call args=[Number(1)] block=false
//! WARN dispatch{method=refunds}: Entry resource does not respond to method
//! ```

/// Installs a compact, `RUST_LOG`-driven subscriber.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
