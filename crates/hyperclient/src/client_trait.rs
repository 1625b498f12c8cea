//! # EntryClient Trait
//!
//! Gives API-specific client types `entry` and `call` for free, built on top of
//! an inner [`HalClient`].
use crate::{ClientError, HalClient, Invocation, ResourceFactory};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Trait for API-specific clients to inherit entry access and call forwarding.
///
/// Implementors only expose their inner [`HalClient`]; any operation the
/// wrapper does not define itself can then be reached through
/// [`call`](EntryClient::call).
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use hyperclient::mock::MockFactory;
/// use hyperclient::{ClientConfig, EntryClient, HalClient};
/// use std::sync::Arc;
///
/// struct ShopApi {
///     inner: HalClient<MockFactory>,
/// }
///
/// impl EntryClient for ShopApi {
///     type Factory = MockFactory;
///
///     fn inner(&self) -> &HalClient<MockFactory> {
///         &self.inner
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mut builder = ClientConfig::builder();
///     builder.entry_point(|| "http://shop.example.com".to_string());
///     let config = Arc::new(builder.build().unwrap());
///
///     let factory = MockFactory::new();
///     factory.resource().expect_call("orders").return_ok(serde_json::json!([]));
///
///     let api = ShopApi { inner: HalClient::new(config, Arc::new(factory)) };
///     let orders = api.call("orders", vec![]).await.unwrap();
///     assert_eq!(orders, serde_json::json!([]));
/// }
/// ```
#[async_trait]
pub trait EntryClient: Send + Sync {
    type Factory: ResourceFactory;

    /// Access the inner generic HalClient.
    fn inner(&self) -> &HalClient<Self::Factory>;

    /// The memoized root resource.
    #[tracing::instrument(skip(self))]
    async fn entry(
        &self,
    ) -> Result<Arc<<Self::Factory as ResourceFactory>::Resource>, ClientError> {
        self.inner().entry().await
    }

    /// Forward a call to the entry resource.
    #[tracing::instrument(skip(self, args))]
    async fn call(&self, method: &str, args: Vec<Value>) -> Result<Value, ClientError> {
        tracing::debug!("Sending request");
        self.inner().call(method, args).await
    }

    /// Forward a prepared invocation, block included.
    async fn dispatch(&self, call: Invocation) -> Result<Value, ClientError> {
        self.inner().dispatch(call).await
    }

    async fn respond_to(&self, method: &str) -> Result<bool, ClientError> {
        self.inner().respond_to(method).await
    }
}
