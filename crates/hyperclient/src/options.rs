//! # HTTP & Resource Options
//!
//! Option bundles handed to the resource layer. [`HttpOptions`] is the flat
//! map accumulated by [`ClientConfigBuilder::http_options`](crate::ClientConfigBuilder::http_options);
//! [`ResourceOptions`] is what the root resource is finally constructed with.
//!
//! ## Merge Semantics
//!
//! Merging is shallow. Top-level keys from the incoming map overwrite existing
//! ones, nested values are replaced wholesale, and keys the incoming map does
//! not mention are left alone.
//!
//! ```rust
//! use hyperclient::HttpOptions;
//! use serde_json::json;
//!
//! let mut opts = HttpOptions::new();
//! opts.merge(HttpOptions::from_value(json!({"headers": {"accept": "json"}, "timeout": 5})).unwrap());
//! opts.merge(HttpOptions::from_value(json!({"headers": {"x-trace": "1"}})).unwrap());
//!
//! assert_eq!(opts.get("headers"), Some(&json!({"x-trace": "1"})));
//! assert_eq!(opts.get("timeout"), Some(&json!(5)));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name given to the root resource.
pub const ENTRY_POINT_NAME: &str = "Entry point";

/// Reserved key under which auth options are stored.
pub const AUTH_KEY: &str = "auth";

/// Mapping from HTTP option name to value (headers, auth block, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HttpOptions(Map<String, Value>);

impl HttpOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds options from a JSON object. Returns `None` for any other value.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Sets a single option, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Shallow merge: every top-level key of `other` overwrites ours.
    pub fn merge(&mut self, other: HttpOptions) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for HttpOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for HttpOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// What an `auth` provider hands back: scheme, user and password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCredentials {
    #[serde(rename = "type")]
    pub auth_type: String,
    pub user: String,
    pub password: String,
}

impl AuthCredentials {
    pub fn new(
        auth_type: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            auth_type: auth_type.into(),
            user: user.into(),
            password: password.into(),
        }
    }
}

/// The auth block as stored in [`HttpOptions`]: `{type, credentials: [user, password]}`.
///
/// The scheme is not checked against a list of known ones here; the resource
/// layer decides whether it understands it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthOptions {
    #[serde(rename = "type")]
    pub auth_type: String,
    pub credentials: [String; 2],
}

impl From<AuthCredentials> for AuthOptions {
    fn from(creds: AuthCredentials) -> Self {
        Self {
            auth_type: creds.auth_type,
            credentials: [creds.user, creds.password],
        }
    }
}

impl AuthOptions {
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "type": self.auth_type,
            "credentials": self.credentials,
        })
    }

    /// Reads the auth block back out of a set of HTTP options.
    pub fn from_http(options: &HttpOptions) -> Option<Self> {
        options
            .get(AUTH_KEY)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}

/// The complete HTTP option bundle: `{http: HttpOptions}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpBundle {
    pub http: HttpOptions,
}

/// Options the root resource is constructed with: `{name, http}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceOptions {
    pub name: String,
    pub http: HttpOptions,
}

impl ResourceOptions {
    /// `{name: "Entry point"}` merged with the given HTTP bundle.
    pub fn entry_point(bundle: HttpBundle) -> Self {
        Self {
            name: ENTRY_POINT_NAME.to_string(),
            http: bundle.http,
        }
    }
}
