use async_trait::async_trait;
use hyperclient::mock::{MockFactory, RecordedCall};
use hyperclient::{
    AuthCredentials, ClientConfig, ClientError, EntryClient, HalClient, HttpOptions, Invocation,
    Resource, ResourceError, ResourceFactory, ResourceOptions,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Barrier;

fn config_with(http: Value) -> Arc<ClientConfig> {
    let mut builder = ClientConfig::builder();
    builder.entry_point(|| "http://api.example.com".to_string());
    builder.http_options(HttpOptions::from_value(http).unwrap());
    Arc::new(builder.build().unwrap())
}

/// The root resource is built against path "" and the configured base, with
/// the entry-point name merged over the HTTP bundle.
#[tokio::test]
async fn test_entry_is_built_with_merged_options() {
    let factory = Arc::new(MockFactory::new());
    let client = HalClient::new(
        config_with(json!({"headers": {"accept": "json"}})),
        factory.clone(),
    );

    client.entry().await.expect("entry should build");

    let builds = factory.builds();
    assert_eq!(builds.len(), 1);
    assert_eq!(builds[0].entry_point, "http://api.example.com");
    assert_eq!(builds[0].path, "");
    assert_eq!(
        serde_json::to_value(&builds[0].options).unwrap(),
        json!({"name": "Entry point", "http": {"headers": {"accept": "json"}}})
    );
}

#[tokio::test]
async fn test_auth_reaches_the_resource() {
    let mut builder = ClientConfig::builder();
    builder.entry_point(|| "http://api.example.com".to_string());
    builder
        .auth(|| AuthCredentials::new("digest", "u", "p"))
        .unwrap();
    let bundle = builder.http_options(HttpOptions::new());
    assert_eq!(
        bundle.http.get("auth"),
        Some(&json!({"type": "digest", "credentials": ["u", "p"]}))
    );

    let factory = Arc::new(MockFactory::new());
    let client = HalClient::new(Arc::new(builder.build().unwrap()), factory.clone());
    client.entry().await.unwrap();

    let options: &ResourceOptions = &factory.builds()[0].options;
    assert_eq!(options.http, bundle.http);
}

#[tokio::test]
async fn test_entry_identity_and_per_instance_memo() {
    let config = config_with(json!({}));
    let factory = Arc::new(MockFactory::new());

    let first = HalClient::new(config.clone(), factory.clone());
    let second = HalClient::new(config, factory.clone());

    let a = first.entry().await.unwrap();
    let b = first.entry().await.unwrap();
    assert!(Arc::ptr_eq(&a, &b), "entry must be the identical instance");

    let c = second.entry().await.unwrap();
    assert!(!Arc::ptr_eq(&a, &c), "clients must not share entry resources");
    assert_eq!(factory.build_count(), 2);
}

/// Builds take long enough that every racing task is waiting inside the
/// once-cell while the first construction is still running.
#[derive(Default)]
struct SlowBuildFactory {
    builds: AtomicUsize,
}

#[async_trait]
impl ResourceFactory for SlowBuildFactory {
    type Resource = Slow;

    async fn build(
        &self,
        _entry_point: &str,
        _path: &str,
        _options: ResourceOptions,
    ) -> Result<Slow, ResourceError> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        Ok(Slow)
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_access_builds_once() {
    const TASKS: usize = 8;
    let factory = Arc::new(SlowBuildFactory::default());
    let client = Arc::new(HalClient::new(config_with(json!({})), factory.clone()));
    let start = Arc::new(Barrier::new(TASKS));

    let mut handles = Vec::new();
    for _ in 0..TASKS {
        let client = client.clone();
        let start = start.clone();
        handles.push(tokio::spawn(async move {
            start.wait().await;
            client.entry().await.unwrap()
        }));
    }
    let mut entries = Vec::new();
    for handle in handles {
        entries.push(handle.await.unwrap());
    }

    assert_eq!(factory.builds.load(Ordering::SeqCst), 1);
    assert!(entries.iter().all(|e| Arc::ptr_eq(e, &entries[0])));
}

#[tokio::test]
async fn test_out_of_order_call_is_refused() {
    let factory = Arc::new(MockFactory::new());
    factory.resource().expect_call("a").return_ok(json!(1));
    factory.resource().expect_call("b").return_ok(json!(2));
    let client = HalClient::new(config_with(json!({})), factory.clone());

    assert!(client.respond_to("a").await.unwrap());
    assert!(!client.respond_to("b").await.unwrap());
    let err = client.call("b", vec![]).await.unwrap_err();
    assert_eq!(err.missing_method(), Some("b"));
    assert!(factory.resource().calls().is_empty());

    assert_eq!(client.call("a", vec![]).await.unwrap(), json!(1));
    assert_eq!(client.call("b", vec![]).await.unwrap(), json!(2));
    factory.resource().verify();
}

#[tokio::test]
async fn test_forwarding_passes_args_and_block_through() {
    let factory = Arc::new(MockFactory::new());
    factory
        .resource()
        .expect_call("orders")
        .return_ok(json!({"count": 2}));
    factory.resource().expect_call("each").return_ok(json!(5));
    let client = HalClient::new(config_with(json!({})), factory.clone());

    let orders = client
        .call("orders", vec![json!({"page": 1}), json!("open")])
        .await
        .unwrap();
    assert_eq!(orders, json!({"count": 2}));

    let doubled = client
        .call_with_block("each", vec![], |v| json!(v.as_i64().unwrap_or(0) * 2))
        .await
        .unwrap();
    assert_eq!(doubled, json!(10));

    assert_eq!(
        factory.resource().calls(),
        vec![
            RecordedCall {
                method: "orders".into(),
                args: vec![json!({"page": 1}), json!("open")],
                had_block: false,
            },
            RecordedCall {
                method: "each".into(),
                args: vec![],
                had_block: true,
            },
        ]
    );
    factory.resource().verify();
}

#[tokio::test]
async fn test_unsupported_method_fails_with_its_name() {
    let factory = Arc::new(MockFactory::new());
    let client = HalClient::new(config_with(json!({})), factory.clone());

    let err = client
        .call("refunds", vec![json!(42)])
        .await
        .expect_err("refunds is not exposed");
    assert_eq!(err.missing_method(), Some("refunds"));
    assert!(err.to_string().contains("refunds"));
    assert!(factory.resource().calls().is_empty());
}

#[tokio::test]
async fn test_resource_errors_propagate() {
    let factory = Arc::new(MockFactory::new());
    factory
        .resource()
        .expect_call("orders")
        .return_err(ResourceError::Failed("500 Internal Server Error".into()));
    let client = HalClient::new(config_with(json!({})), factory);

    let err = client.call("orders", vec![]).await.unwrap_err();
    assert!(matches!(err, ClientError::Resource(ResourceError::Failed(msg)) if msg.contains("500")));
}

struct ShopApi {
    inner: HalClient<MockFactory>,
}

impl EntryClient for ShopApi {
    type Factory = MockFactory;

    fn inner(&self) -> &HalClient<MockFactory> {
        &self.inner
    }
}

#[tokio::test]
async fn test_entry_client_wrapper_gets_forwarding() {
    let factory = Arc::new(MockFactory::new());
    factory.resource().expect_call("products").return_ok(json!([]));
    factory.resource().expect_call("search").return_ok(json!(["hit"]));
    let api = ShopApi {
        inner: HalClient::new(config_with(json!({})), factory.clone()),
    };

    assert!(api.respond_to("products").await.unwrap());
    assert_eq!(api.call("products", vec![]).await.unwrap(), json!([]));
    let hits = api
        .dispatch(Invocation::new("search", vec![json!("q")]).with_block(|v| v))
        .await
        .unwrap();
    assert_eq!(hits, json!(["hit"]));
    assert!(Arc::ptr_eq(
        &api.entry().await.unwrap(),
        &api.entry().await.unwrap()
    ));
}

struct Slow;

#[async_trait]
impl Resource for Slow {
    fn responds_to(&self, _method: &str) -> bool {
        true
    }

    async fn invoke(&self, _call: Invocation) -> Result<Value, ResourceError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(Value::Null)
    }
}

struct SlowFactory;

#[async_trait]
impl ResourceFactory for SlowFactory {
    type Resource = Slow;

    async fn build(
        &self,
        _entry_point: &str,
        _path: &str,
        _options: ResourceOptions,
    ) -> Result<Slow, ResourceError> {
        Ok(Slow)
    }
}

/// Timeouts wrapped around a forwarded call are not swallowed.
#[tokio::test(start_paused = true)]
async fn test_timeout_propagates() {
    let client = HalClient::new(config_with(json!({})), Arc::new(SlowFactory));
    let result = tokio::time::timeout(Duration::from_secs(1), client.call("anything", vec![])).await;
    assert!(result.is_err());
    assert!(client.is_constructed());
}
