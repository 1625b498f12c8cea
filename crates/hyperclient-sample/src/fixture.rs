//! # In-Memory Resource
//!
//! A [`Resource`] backed by a fixed table of relation name → JSON value. It
//! stands in for a real HTTP-backed resource in the demo and the tests.
//!
//! ## Behaviour
//!
//! - `responds_to(name)` is true for every relation in the table, plus `url`.
//! - `invoke(name)` returns the stored value, passed through the block when
//!   one is given. With a string argument and an object value, only that key
//!   is returned (`null` when missing).
//! - `url` returns the absolute URL the resource was built for.
//!
//! The factory plays the part of the HTTP layer when it comes to auth: it only
//! accepts the `basic` and `digest` schemes.

use async_trait::async_trait;
use hyperclient::{AuthOptions, Invocation, Resource, ResourceError, ResourceFactory, ResourceOptions};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Auth schemes [`StaticFactory`] understands.
pub const SUPPORTED_AUTH: [&str; 2] = ["basic", "digest"];

/// A resource answering from a fixed relation table.
#[derive(Debug, Clone)]
pub struct StaticResource {
    url: String,
    name: String,
    relations: BTreeMap<String, Value>,
}

impl StaticResource {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, method: &str, args: &[Value]) -> Value {
        if method == "url" {
            return Value::String(self.url.clone());
        }
        let value = self.relations.get(method).cloned().unwrap_or(Value::Null);
        match (args.first(), value) {
            (Some(Value::String(key)), Value::Object(mut map)) => {
                map.remove(key).unwrap_or(Value::Null)
            }
            (_, value) => value,
        }
    }
}

#[async_trait]
impl Resource for StaticResource {
    fn responds_to(&self, method: &str) -> bool {
        method == "url" || self.relations.contains_key(method)
    }

    async fn invoke(&self, mut call: Invocation) -> Result<Value, ResourceError> {
        let value = self.lookup(&call.method, &call.args);
        debug!(resource = %self.name, method = %call.method, "Answering from fixture");
        Ok(call.yield_value(value))
    }
}

/// Builds [`StaticResource`]s over one relation table.
#[derive(Debug, Clone, Default)]
pub struct StaticFactory {
    relations: BTreeMap<String, Value>,
}

impl StaticFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_relation(mut self, name: impl Into<String>, value: Value) -> Self {
        self.relations.insert(name.into(), value);
        self
    }

    /// Loads every top-level key of a JSON object as a relation.
    pub fn from_document(document: Map<String, Value>) -> Self {
        Self {
            relations: document.into_iter().collect(),
        }
    }
}

#[async_trait]
impl ResourceFactory for StaticFactory {
    type Resource = StaticResource;

    async fn build(
        &self,
        entry_point: &str,
        path: &str,
        options: ResourceOptions,
    ) -> Result<StaticResource, ResourceError> {
        if let Some(auth) = AuthOptions::from_http(&options.http) {
            if !SUPPORTED_AUTH.contains(&auth.auth_type.as_str()) {
                return Err(ResourceError::UnsupportedAuth(auth.auth_type));
            }
        }
        Ok(StaticResource {
            url: format!("{}{}", entry_point.trim_end_matches('/'), path),
            name: options.name,
            relations: self.relations.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperclient::{HttpBundle, HttpOptions};
    use serde_json::json;

    fn options(http: HttpOptions) -> ResourceOptions {
        ResourceOptions::entry_point(HttpBundle { http })
    }

    #[tokio::test]
    async fn answers_from_the_table() {
        let factory = StaticFactory::new().with_relation("orders", json!({"open": [1], "closed": []}));
        let resource = factory
            .build("http://api.example.com/", "", options(HttpOptions::new()))
            .await
            .unwrap();

        assert!(resource.responds_to("orders"));
        assert!(resource.responds_to("url"));
        assert!(!resource.responds_to("refunds"));
        assert_eq!(resource.name(), "Entry point");

        let url = resource.invoke(Invocation::new("url", vec![])).await.unwrap();
        assert_eq!(url, json!("http://api.example.com"));

        let open = resource
            .invoke(Invocation::new("orders", vec![json!("open")]))
            .await
            .unwrap();
        assert_eq!(open, json!([1]));

        let missing = resource
            .invoke(Invocation::new("orders", vec![json!("void")]))
            .await
            .unwrap();
        assert_eq!(missing, Value::Null);
    }

    #[tokio::test]
    async fn rejects_unknown_auth_schemes() {
        let http = HttpOptions::new().with("auth", json!({"type": "ntlm", "credentials": ["u", "p"]}));
        let result = StaticFactory::new().build("http://x", "", options(http)).await;
        assert!(matches!(result, Err(ResourceError::UnsupportedAuth(t)) if t == "ntlm"));
    }
}
