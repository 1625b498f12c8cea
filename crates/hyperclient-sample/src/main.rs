//! # Hyperclient Sample
//!
//! Walks through the client layer against an in-memory API:
//! 1.  Building the shared configuration from the environment.
//! 2.  Lazily constructing the entry resource.
//! 3.  Forwarding calls, with and without a block.
//! 4.  Calling a method the API does not expose.

use hyperclient::tracing::setup_tracing;
use hyperclient::EntryClient;
use hyperclient_sample::api::{shared_config, ExampleApi};
use hyperclient_sample::error::SampleError;
use hyperclient_sample::fixture::StaticFactory;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), SampleError> {
    setup_tracing();

    let config = shared_config()?;
    info!(entry_point = %config.entry_point(), "Configuration loaded");

    let factory = Arc::new(
        StaticFactory::new()
            .with_relation("orders", json!({"open": [{"id": 1}, {"id": 2}], "closed": [{"id": 3}]}))
            .with_relation("products", json!([{"sku": "widget"}])),
    );

    let api = ExampleApi::new(factory.clone())?;

    let span = tracing::info_span!("browse");
    async {
        let url = api.call("url", vec![]).await?;
        info!(%url, "Entry resource ready");

        let open = api.orders(Some("open")).await?;
        info!(count = open.as_array().map_or(0, Vec::len), "Open orders");

        let skus = api
            .inner()
            .call_with_block("products", vec![], |products| {
                json!(products
                    .as_array()
                    .map(|items| items.iter().map(|p| p["sku"].clone()).collect::<Vec<_>>())
                    .unwrap_or_default())
            })
            .await?;
        info!(%skus, "Product SKUs");
        Ok::<_, hyperclient::ClientError>(())
    }
    .instrument(span)
    .await?;

    match api.call("refunds", vec![json!(1)]).await {
        Ok(value) => info!(%value, "Unexpected refunds response"),
        Err(e) => error!(error = %e, "Refunds are not exposed by this API"),
    }

    // A second client shares the configuration but builds its own entry resource.
    let other = ExampleApi::new(factory)?;
    let same = Arc::ptr_eq(&api.entry().await?, &other.entry().await?);
    info!(shared_entry = same, "Second client ready");

    Ok(())
}
