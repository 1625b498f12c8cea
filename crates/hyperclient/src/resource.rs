//! # Resource Traits
//!
//! The contract between the client layer and the hypermedia resource layer.
//! The client never fetches or parses anything itself. It asks a
//! [`ResourceFactory`] for the root resource and forwards calls to that
//! [`Resource`].
//!
//! # Architecture Note
//! Splitting "what a resource can do" ([`Resource`]) from "how the root one is
//! built" ([`ResourceFactory`]) lets the same [`HalClient`](crate::HalClient)
//! drive a real HTTP-backed implementation, an in-memory fixture, or the
//! [`mock`](crate::mock) types without any change to the forwarding logic.
//!
//! ```rust
//! use async_trait::async_trait;
//! use hyperclient::{Invocation, Resource, ResourceError};
//! use serde_json::{json, Value};
//!
//! struct Root;
//!
//! #[async_trait]
//! impl Resource for Root {
//!     fn responds_to(&self, method: &str) -> bool {
//!         method == "links"
//!     }
//!
//!     async fn invoke(&self, mut call: Invocation) -> Result<Value, ResourceError> {
//!         Ok(call.yield_value(json!(["self", "orders"])))
//!     }
//! }
//! ```

use crate::error::ResourceError;
use crate::message::Invocation;
use crate::options::ResourceOptions;
use async_trait::async_trait;
use serde_json::Value;

/// A hypermedia resource that can be probed for and sent calls.
#[async_trait]
pub trait Resource: Send + Sync + 'static {
    /// Whether the resource understands `method`.
    fn responds_to(&self, method: &str) -> bool;

    /// Executes a call. Only invoked after `responds_to` returned `true`.
    ///
    /// May suspend for as long as the resource needs (network, cache, ...).
    async fn invoke(&self, call: Invocation) -> Result<Value, ResourceError>;
}

/// Builds the root resource of an API.
#[async_trait]
pub trait ResourceFactory: Send + Sync + 'static {
    type Resource: Resource;

    /// Constructs the resource at `path`, relative to `entry_point`.
    ///
    /// The client calls this with an empty path and
    /// [`ResourceOptions::entry_point`] options.
    async fn build(
        &self,
        entry_point: &str,
        path: &str,
        options: ResourceOptions,
    ) -> Result<Self::Resource, ResourceError>;
}
