//! # Entry-Point Client
//!
//! This module defines [`HalClient`], the object a consumer talks to. It owns
//! the memoized root resource and forwards calls to it.

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::message::Invocation;
use crate::resource::{Resource, ResourceFactory};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument, warn};

/// Path of the root resource relative to the entry point.
const ENTRY_PATH: &str = "";

/// ## HalClient
///
/// A client for one HAL API. It holds the shared [`ClientConfig`], the
/// [`ResourceFactory`] that knows how to build the root resource, and a
/// compute-once cell for that resource.
///
/// * **Lazy** – nothing is constructed until [`entry`](Self::entry) or a
///   forwarded call first needs the resource.
/// * **Memoized per instance** – every call on the same client sees the same
///   `Arc`; two clients never share an entry resource.
/// * **Concurrent-safe** – racing first accesses construct the resource once.
///
/// A failed construction leaves the cell empty, so the next access retries.
pub struct HalClient<F: ResourceFactory> {
    config: Arc<ClientConfig>,
    factory: Arc<F>,
    entry: OnceCell<Arc<F::Resource>>,
}

impl<F: ResourceFactory> HalClient<F> {
    pub fn new(config: Arc<ClientConfig>, factory: Arc<F>) -> Self {
        Self {
            config,
            factory,
            entry: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Whether the entry resource has been built yet.
    pub fn is_constructed(&self) -> bool {
        self.entry.initialized()
    }

    /// Returns the root resource, building it on first use.
    #[instrument(skip(self), fields(entry_point = %self.config.entry_point()))]
    pub async fn entry(&self) -> Result<Arc<F::Resource>, ClientError> {
        let entry = self
            .entry
            .get_or_try_init(|| async {
                info!("Constructing entry resource");
                let resource = self
                    .factory
                    .build(
                        self.config.entry_point(),
                        ENTRY_PATH,
                        self.config.resource_options(),
                    )
                    .await?;
                Ok::<_, ClientError>(Arc::new(resource))
            })
            .await?;
        Ok(Arc::clone(entry))
    }

    /// Whether a call to `method` would be forwarded.
    pub async fn respond_to(&self, method: &str) -> Result<bool, ClientError> {
        Ok(self.entry().await?.responds_to(method))
    }

    /// Forwards `method(args)` to the entry resource.
    pub async fn call(&self, method: &str, args: Vec<Value>) -> Result<Value, ClientError> {
        self.dispatch(Invocation::new(method, args)).await
    }

    /// Forwards `method(args)` along with a trailing block.
    pub async fn call_with_block<B>(
        &self,
        method: &str,
        args: Vec<Value>,
        block: B,
    ) -> Result<Value, ClientError>
    where
        B: FnMut(Value) -> Value + Send + 'static,
    {
        self.dispatch(Invocation::new(method, args).with_block(block))
            .await
    }

    /// Forwards a prepared [`Invocation`].
    ///
    /// Fails with [`ClientError::NoSuchMethod`] when the entry resource does
    /// not respond to the method. Resource errors are returned as-is.
    #[instrument(skip(self, call), fields(method = %call.method))]
    pub async fn dispatch(&self, call: Invocation) -> Result<Value, ClientError> {
        let entry = self.entry().await?;
        if !entry.responds_to(&call.method) {
            warn!("Entry resource does not respond to method");
            return Err(ClientError::NoSuchMethod {
                method: call.method,
                args: call.args,
            });
        }
        debug!(args = ?call.args, block = call.has_block(), "Forwarding call");
        Ok(entry.invoke(call).await?)
    }
}
