//! # Mock Resources & Testing Guide
//!
//! [`MockResource`] and [`MockFactory`] implement the [`Resource`] and
//! [`ResourceFactory`] traits entirely in memory. They let you script what the
//! entry resource answers and then inspect what the client sent it, without
//! any HTTP server.
//!
//! ## When to use Mocks vs a Real Resource
//!
//! | Feature | MockResource | Real Resource |
//! |---------|--------------|---------------|
//! | **Speed** | Instant (in-memory) | Network bound |
//! | **Determinism** | 100% Deterministic | Subject to the remote API |
//! | **Capabilities** | Exactly the scripted methods | Whatever the HAL document links |
//! | **Use Case** | Testing client logic and wrappers | End-to-end checks |
//! | **Error Injection** | Easy (`return_err`, `fail_next_build`) | Hard |
//!
//! ## Scripting Calls
//!
//! Expectations are consumed in order. The mock responds to a method only
//! when it is the next expected call, so a call made out of order is refused
//! by the client with `NoSuchMethod` instead of reaching the mock.
//!
//! ```rust
//! use hyperclient::mock::MockFactory;
//! use hyperclient::{ClientConfig, ClientError, HalClient};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut builder = ClientConfig::builder();
//!     builder.entry_point(|| "http://api.example.com".to_string());
//!     let config = Arc::new(builder.build().unwrap());
//!
//!     // 1. Script the entry resource
//!     let factory = Arc::new(MockFactory::new());
//!     factory.resource().expect_call("links").return_ok(json!(["orders"]));
//!
//!     // 2. Drive the client
//!     let client = HalClient::new(config, factory.clone());
//!     assert_eq!(client.call("links", vec![]).await.unwrap(), json!(["orders"]));
//!     assert!(matches!(
//!         client.call("links", vec![]).await,
//!         Err(ClientError::NoSuchMethod { .. })
//!     ));
//!
//!     // 3. Inspect
//!     assert_eq!(factory.build_count(), 1);
//!     factory.resource().verify();
//! }
//! ```
//!
//! ## Testing Failure Scenarios
//!
//! ```rust
//! use hyperclient::mock::MockFactory;
//! use hyperclient::{ClientConfig, ClientError, HalClient, ResourceError};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut builder = ClientConfig::builder();
//!     builder.entry_point(|| "http://api.example.com".to_string());
//!     let factory = Arc::new(MockFactory::new());
//!     factory.fail_next_build(ResourceError::Failed("connection refused".into()));
//!
//!     let client = HalClient::new(Arc::new(builder.build().unwrap()), factory);
//!     let result = client.entry().await;
//!     assert!(matches!(result, Err(ClientError::Resource(ResourceError::Failed(_)))));
//! }
//! ```

use crate::error::ResourceError;
use crate::message::Invocation;
use crate::options::ResourceOptions;
use crate::resource::{Resource, ResourceFactory};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// =============================================================================
// MOCK RESOURCE
// =============================================================================

struct Expectation {
    method: String,
    response: Result<Value, ResourceError>,
}

/// A call the mock received.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: String,
    pub args: Vec<Value>,
    pub had_block: bool,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    calls: Vec<RecordedCall>,
}

/// A scripted in-memory resource.
///
/// Cloning is cheap and every clone shares the same script and call log, so a
/// test can keep one handle while the client owns another.
#[derive(Clone, Default)]
pub struct MockResource {
    state: Arc<Mutex<MockState>>,
}

impl MockResource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a call to `method`.
    pub fn expect_call(&self, method: impl Into<String>) -> CallExpectationBuilder {
        CallExpectationBuilder {
            method: method.into(),
            state: self.state.clone(),
        }
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

#[async_trait]
impl Resource for MockResource {
    fn responds_to(&self, method: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .expectations
            .front()
            .is_some_and(|e| e.method == method)
    }

    async fn invoke(&self, mut call: Invocation) -> Result<Value, ResourceError> {
        let expectation = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(RecordedCall {
                method: call.method.clone(),
                args: call.args.clone(),
                had_block: call.has_block(),
            });
            state.expectations.pop_front()
        };

        match expectation {
            Some(Expectation { method, response }) if method == call.method => {
                // Results are yielded through the block, if the caller passed one.
                response.map(|value| call.yield_value(value))
            }
            Some(Expectation { method, .. }) => {
                panic!("Unexpected call `{}`, expected `{}`", call.method, method)
            }
            None => panic!("Unexpected call `{}`, no expectations left", call.method),
        }
    }
}

/// Builder for call expectations.
pub struct CallExpectationBuilder {
    method: String,
    state: Arc<Mutex<MockState>>,
}

impl CallExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Value) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ResourceError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Value, ResourceError>) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation {
            method: self.method,
            response,
        });
    }
}

// =============================================================================
// MOCK FACTORY
// =============================================================================

/// Arguments a [`MockFactory`] was asked to build with.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildRequest {
    pub entry_point: String,
    pub path: String,
    pub options: ResourceOptions,
}

/// Factory handing out clones of one [`MockResource`] and recording every
/// construction request.
#[derive(Default)]
pub struct MockFactory {
    resource: MockResource,
    builds: Mutex<Vec<BuildRequest>>,
    failures: Mutex<VecDeque<ResourceError>>,
}

impl MockFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The resource every successful build returns.
    pub fn resource(&self) -> &MockResource {
        &self.resource
    }

    /// Makes the next build fail with `error`.
    pub fn fail_next_build(&self, error: ResourceError) {
        self.failures.lock().unwrap().push_back(error);
    }

    pub fn builds(&self) -> Vec<BuildRequest> {
        self.builds.lock().unwrap().clone()
    }

    pub fn build_count(&self) -> usize {
        self.builds.lock().unwrap().len()
    }
}

#[async_trait]
impl ResourceFactory for MockFactory {
    type Resource = MockResource;

    async fn build(
        &self,
        entry_point: &str,
        path: &str,
        options: ResourceOptions,
    ) -> Result<MockResource, ResourceError> {
        self.builds.lock().unwrap().push(BuildRequest {
            entry_point: entry_point.to_string(),
            path: path.to_string(),
            options,
        });
        if let Some(error) = self.failures.lock().unwrap().pop_front() {
            return Err(error);
        }
        Ok(self.resource.clone())
    }
}
