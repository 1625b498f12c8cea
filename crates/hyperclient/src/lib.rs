//! # Hyperclient
//!
//! This crate is the entry-point layer of a client for HAL hypermedia APIs.
//! A consumer declares where its API starts and how to talk to it; the crate
//! exposes a single **entry** resource and forwards calls to it.
//!
//! ## Why an Entry Point?
//!
//! A HAL API is discovered, not declared. Every resource lists its relations
//! in `_links` and `_embedded`, so a client only needs to know the root URL.
//! Everything else is reached by following relations from there.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Configuration Layer** ([`ClientConfigBuilder`] → [`ClientConfig`]) - entry point, auth and HTTP options
//! 2. **Client Layer** ([`HalClient`], [`EntryClient`]) - lazy entry resource and call forwarding
//! 3. **Resource Layer** ([`Resource`], [`ResourceFactory`]) - the hypermedia resource itself, supplied by the caller
//!
//! HTTP transport, HAL parsing and link traversal live entirely in the
//! resource layer. This crate never opens a connection.
//!
//! ## Quick Tour
//!
//! ```rust
//! use hyperclient::mock::MockFactory;
//! use hyperclient::{AuthCredentials, ClientConfig, HalClient, HttpOptions};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     // 1. Describe the API once
//!     let mut builder = ClientConfig::builder();
//!     builder.entry_point(|| "http://api.example.com".to_string());
//!     builder.auth(|| AuthCredentials::new("digest", "user", "secret")).unwrap();
//!     builder.http_options(HttpOptions::new().with("headers", json!({"accept": "application/hal+json"})));
//!     let config = Arc::new(builder.build().unwrap());
//!
//!     // 2. Create a client over some resource implementation
//!     let factory = Arc::new(MockFactory::new());
//!     factory.resource().expect_call("orders").return_ok(json!([{"id": 1}]));
//!     let client = HalClient::new(config, factory.clone());
//!
//!     // 3. Forward calls to the entry resource
//!     let orders = client.call("orders", vec![]).await.unwrap();
//!     assert_eq!(orders, json!([{"id": 1}]));
//!
//!     // The entry resource was built once, with the merged options
//!     let build = &factory.builds()[0];
//!     assert_eq!(build.path, "");
//!     assert_eq!(build.options.name, "Entry point");
//! }
//! ```
//!
//! ## Sharing & Memoization
//!
//! - A [`ClientConfig`] is immutable once built and is shared (via `Arc`) by
//!   every client of the same API.
//! - Each [`HalClient`] builds its entry resource at most once, on first use,
//!   and keeps it for its whole lifetime. Clients never share entry resources.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockResource`](mock::MockResource) and
//! [`MockFactory`](mock::MockFactory) for scripting the entry resource in
//! unit tests.

pub mod client;
pub mod client_trait;
pub mod config;
pub mod error;
pub mod message;
pub mod mock;
pub mod options;
pub mod resource;
pub mod tracing;

// Re-export core types for convenience
pub use client::HalClient;
pub use client_trait::EntryClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{ClientError, ConfigError, ResourceError};
pub use message::{Block, Invocation};
pub use options::{AuthCredentials, AuthOptions, HttpBundle, HttpOptions, ResourceOptions};
pub use resource::{Resource, ResourceFactory};
