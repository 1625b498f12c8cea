//! # Example API Client
//!
//! A consumer of the `hyperclient` crate. All `ExampleApi` instances share one
//! [`ClientConfig`], built from the environment the first time it is needed,
//! while each instance keeps its own entry resource.
//!
//! ```rust
//! use hyperclient::EntryClient;
//! use hyperclient_sample::api::ExampleApi;
//! use hyperclient_sample::fixture::StaticFactory;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let factory = Arc::new(StaticFactory::new().with_relation("orders", json!([])));
//!     let api = ExampleApi::new(factory)?;
//!     assert_eq!(api.call("orders", vec![]).await?, json!([]));
//!     Ok(())
//! }
//! ```

use crate::fixture::StaticFactory;
use crate::settings::Settings;
use hyperclient::{ClientConfig, ClientError, ConfigError, EntryClient, HalClient};
use serde_json::Value;
use std::sync::{Arc, OnceLock};
use tracing::{debug, instrument};

static SHARED_CONFIG: OnceLock<Arc<ClientConfig>> = OnceLock::new();

/// Configuration shared by every [`ExampleApi`].
///
/// Built from [`Settings::from_env`] on first call and frozen afterwards.
pub fn shared_config() -> Result<Arc<ClientConfig>, ConfigError> {
    if let Some(config) = SHARED_CONFIG.get() {
        return Ok(config.clone());
    }
    let config = Arc::new(Settings::from_env().builder()?.build()?);
    Ok(SHARED_CONFIG.get_or_init(|| config).clone())
}

/// Client for the example API.
pub struct ExampleApi {
    inner: HalClient<StaticFactory>,
}

impl ExampleApi {
    /// A client over the shared configuration.
    ///
    /// Configuration problems surface as [`ClientError::Config`].
    pub fn new(factory: Arc<StaticFactory>) -> Result<Self, ClientError> {
        Ok(Self::with_config(shared_config()?, factory))
    }

    pub fn with_config(config: Arc<ClientConfig>, factory: Arc<StaticFactory>) -> Self {
        Self {
            inner: HalClient::new(config, factory),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        self.inner.config()
    }

    /// Orders, optionally narrowed to one state (`open`, `closed`, ...).
    #[instrument(skip(self))]
    pub async fn orders(&self, state: Option<&str>) -> Result<Value, ClientError> {
        debug!("Fetching orders");
        let args = state.map(|s| vec![Value::from(s)]).unwrap_or_default();
        self.call("orders", args).await
    }
}

impl EntryClient for ExampleApi {
    type Factory = StaticFactory;

    fn inner(&self) -> &HalClient<StaticFactory> {
        &self.inner
    }
}
