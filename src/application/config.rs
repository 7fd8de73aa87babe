/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{get_env_flag, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Login credentials for the Stream API
pub struct Credentials {
    /// Username of the Stream account
    pub username: String,
    /// Password of the Stream account
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Stream API client
pub struct Config {
    /// Login credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API transport
pub struct RestApiConfig {
    /// Base URL of the Stream API, e.g. `https://host/attask/api`
    pub base_url: String,
    /// Timeout in seconds for each request
    pub timeout: u64,
    /// Skip TLS certificate verification
    ///
    /// Only for legacy servers with self-signed certificates. Defaults to `false`.
    pub accept_invalid_certs: bool,
}

impl RestApiConfig {
    /// Creates a transport configuration for `base_url` with secure defaults
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            accept_invalid_certs: false,
        }
    }

    /// Sets the request timeout in seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    /// Disables TLS certificate verification
    #[must_use]
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from environment variables and an optional `.env` file
    ///
    /// Recognised variables: `STREAM_API_URL`, `STREAM_USERNAME`, `STREAM_PASSWORD`,
    /// `STREAM_TIMEOUT` and `STREAM_ACCEPT_INVALID_CERTS`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("STREAM_USERNAME", String::from("default_username"));
        let password = get_env_or_default("STREAM_PASSWORD", String::from("default_password"));

        if username == "default_username" {
            error!("STREAM_USERNAME not found in environment variables or .env file");
        }
        if password == "default_password" {
            error!("STREAM_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { username, password },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("STREAM_API_URL", String::from(DEFAULT_API_URL)),
                timeout: get_env_or_default("STREAM_TIMEOUT", DEFAULT_TIMEOUT_SECS),
                accept_invalid_certs: get_env_flag("STREAM_ACCEPT_INVALID_CERTS", false),
            },
        }
    }
}
