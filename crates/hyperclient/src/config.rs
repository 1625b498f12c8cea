//! # Client Configuration
//!
//! A consumer describes its API once: where the entry point lives, how to
//! authenticate, and which HTTP options the resource layer should receive.
//! [`ClientConfigBuilder`] collects those settings and [`ClientConfigBuilder::build`]
//! freezes them into an immutable [`ClientConfig`].
//!
//! ## Sharing
//!
//! Every client of the same consumer type shares one configuration. Wrap it in
//! an `Arc` (or keep it in a `LazyLock` static) and hand it to each
//! [`HalClient`](crate::HalClient). Because a built config can no longer be
//! mutated, a client can never observe a half-applied configuration, and the
//! entry resource it memoizes is always built from the settings it was given.
//!
//! ```rust
//! use hyperclient::{AuthCredentials, ClientConfig, HttpOptions};
//! use serde_json::json;
//!
//! let mut builder = ClientConfig::builder();
//! builder.entry_point(|| "http://api.example.com".to_string());
//! builder.auth(|| AuthCredentials::new("basic", "user", "secret")).unwrap();
//! let bundle = builder.http_options(HttpOptions::new().with("headers", json!({"accept": "json"})));
//! assert!(bundle.http.contains_key("auth"));
//!
//! let config = builder.build().unwrap();
//! assert_eq!(config.entry_point(), "http://api.example.com");
//! ```

use crate::error::ConfigError;
use crate::options::{AuthCredentials, AuthOptions, HttpBundle, HttpOptions, ResourceOptions, AUTH_KEY};
use tracing::{debug, instrument};

/// Frozen API configuration shared by all clients of one consumer type.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    entry_point: String,
    http: HttpOptions,
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// URL of the root resource.
    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    pub fn http_options(&self) -> &HttpOptions {
        &self.http
    }

    /// The accumulated options as `{http: ...}`.
    pub fn http_bundle(&self) -> HttpBundle {
        HttpBundle {
            http: self.http.clone(),
        }
    }

    /// Options for constructing the root resource.
    pub fn resource_options(&self) -> ResourceOptions {
        ResourceOptions::entry_point(self.http_bundle())
    }
}

/// Accumulates configuration before it is frozen into a [`ClientConfig`].
#[derive(Debug, Default, Clone)]
pub struct ClientConfigBuilder {
    entry_point: Option<String>,
    http: HttpOptions,
}

impl ClientConfigBuilder {
    /// Sets the entry point from a provider. Last call wins.
    pub fn entry_point<F>(&mut self, url: F) -> &mut Self
    where
        F: FnOnce() -> String,
    {
        let url = url();
        debug!(%url, "entry point set");
        self.entry_point = Some(url);
        self
    }

    /// Folds `{type, credentials: [user, password]}` into the HTTP options
    /// under `auth`.
    ///
    /// An empty type or user is rejected. The scheme itself is passed through
    /// untouched.
    #[instrument(skip_all)]
    pub fn auth<F>(&mut self, options: F) -> Result<HttpBundle, ConfigError>
    where
        F: FnOnce() -> AuthCredentials,
    {
        let creds = options();
        if creds.auth_type.trim().is_empty() {
            return Err(ConfigError::InvalidAuth("missing type".to_string()));
        }
        if creds.user.is_empty() {
            return Err(ConfigError::InvalidAuth("missing user".to_string()));
        }
        debug!(auth_type = %creds.auth_type, "auth configured");
        let auth = AuthOptions::from(creds);
        Ok(self.http_options(HttpOptions::new().with(AUTH_KEY, auth.to_value())))
    }

    /// Shallow-merges `options` into the accumulated HTTP options and returns
    /// the complete bundle.
    pub fn http_options(&mut self, options: HttpOptions) -> HttpBundle {
        self.http.merge(options);
        HttpBundle {
            http: self.http.clone(),
        }
    }

    pub fn build(&self) -> Result<ClientConfig, ConfigError> {
        let entry_point = self
            .entry_point
            .clone()
            .ok_or(ConfigError::MissingEntryPoint)?;
        if entry_point.trim().is_empty() {
            return Err(ConfigError::EmptyEntryPoint);
        }
        Ok(ClientConfig {
            entry_point,
            http: self.http.clone(),
        })
    }
}
