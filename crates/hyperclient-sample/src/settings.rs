//! Environment-driven settings for the sample API.

use hyperclient::{AuthCredentials, ClientConfig, ClientConfigBuilder, ConfigError, HttpOptions};
use serde_json::json;
use std::env;

pub const ENTRY_POINT_VAR: &str = "HYPERCLIENT_ENTRY_POINT";
pub const AUTH_TYPE_VAR: &str = "HYPERCLIENT_AUTH_TYPE";
pub const USER_VAR: &str = "HYPERCLIENT_USER";
pub const PASSWORD_VAR: &str = "HYPERCLIENT_PASSWORD";

pub const DEFAULT_ENTRY_POINT: &str = "http://api.example.com";

/// Settings for [`ExampleApi`](crate::api::ExampleApi).
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub entry_point: String,
    /// Only applied when `user` is set.
    pub auth_type: String,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            auth_type: "basic".to_string(),
            user: None,
            password: None,
        }
    }
}

impl Settings {
    /// Reads settings from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            entry_point: env::var(ENTRY_POINT_VAR).unwrap_or(defaults.entry_point),
            auth_type: env::var(AUTH_TYPE_VAR).unwrap_or(defaults.auth_type),
            user: env::var(USER_VAR).ok(),
            password: env::var(PASSWORD_VAR).ok(),
        }
    }

    /// A builder preloaded with these settings and the HAL accept header.
    pub fn builder(&self) -> Result<ClientConfigBuilder, ConfigError> {
        let mut builder = ClientConfig::builder();
        let entry_point = self.entry_point.clone();
        builder.entry_point(move || entry_point);
        if let Some(user) = &self.user {
            let creds = AuthCredentials::new(
                self.auth_type.clone(),
                user.clone(),
                self.password.clone().unwrap_or_default(),
            );
            builder.auth(move || creds)?;
        }
        builder.http_options(
            HttpOptions::new().with("headers", json!({"accept": "application/hal+json"})),
        );
        Ok(builder)
    }
}
