/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Session client for the Stream API
//!
//! Every verb is tunnelled through a form-encoded `POST`: the logical method,
//! the session token and the optional field selection travel as form fields
//! next to the caller's parameters, and the server dispatches on them.
//!
//! # Example
//! ```ignore
//! use stream_client::prelude::*;
//!
//! let mut client = StreamClient::new("http://localhost/attask/api")?;
//! client.login("admin", "user").await?;
//!
//! let task = client
//!     .create(&ObjCode::TASK, &Params::from([("name", "Write docs")]), &[])
//!     .await?;
//! client.logout().await?;
//! ```

use crate::application::config::{Config, RestApiConfig};
use crate::application::interfaces::object::ObjectService;
use crate::constants::{PATH_LOGIN, PATH_LOGOUT, PATH_SEARCH};
use crate::error::AppError;
use crate::model::auth::Session;
use crate::model::http::{build_http_client, make_http_request, parse_response};
use crate::model::requests::{LogicalMethod, ObjCode, Params, build_form};
use crate::model::responses::{LoginResponse, from_data};
use async_trait::async_trait;
use reqwest::{Client as HttpInternalClient, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

/// Client for the Stream API holding one authenticated session
///
/// A handle is independent of any other: it owns its base URL, its HTTP
/// client and its session. Calls on one handle are meant to be made one at a
/// time; `login` and `logout` take `&mut self` for that reason.
#[derive(Debug)]
pub struct StreamClient {
    base_url: String,
    http_client: HttpInternalClient,
    session: Option<Session>,
}

impl StreamClient {
    /// Creates a client for `base_url` with default transport settings
    ///
    /// TLS certificates are verified and requests time out after 30 seconds.
    ///
    /// # Returns
    /// * `Ok(StreamClient)` - Client without a session
    /// * `Err(AppError::InvalidInput)` - If `base_url` is not an http(s) URL
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        Self::with_config(&RestApiConfig::new(base_url))
    }

    /// Creates a client from a transport configuration
    pub fn with_config(rest_api: &RestApiConfig) -> Result<Self, AppError> {
        let url = Url::parse(&rest_api.base_url).map_err(|e| {
            AppError::InvalidInput(format!("invalid base URL '{}': {e}", rest_api.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::InvalidInput(format!(
                "unsupported scheme '{}' in base URL",
                url.scheme()
            )));
        }
        // Paths are appended textually, so a query or fragment would swallow them
        if url.query().is_some() || url.fragment().is_some() {
            return Err(AppError::InvalidInput(format!(
                "base URL '{}' must not carry a query or fragment",
                rest_api.base_url
            )));
        }

        let http_client = build_http_client(rest_api)?;

        Ok(Self {
            base_url: rest_api.base_url.trim_end_matches('/').to_string(),
            http_client,
            session: None,
        })
    }

    /// Creates a client from `config` and logs in with its credentials
    ///
    /// # Returns
    /// * `Ok(StreamClient)` - Authenticated client ready to use
    /// * `Err(AppError)` - If the URL is invalid or login fails
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        let mut client = Self::with_config(&config.rest_api)?;
        client
            .login(&config.credentials.username, &config.credentials.password)
            .await?;
        Ok(client)
    }

    /// Base URL every path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Identifier of the logged-in user, if any
    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user_id.as_str())
    }

    /// Current session token, if any
    pub fn session_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.session_id.as_str())
    }

    /// Whether a session is currently held
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// Logs in and keeps the returned session for later calls
    ///
    /// The login call itself carries no session token, even when one is held.
    ///
    /// # Returns
    /// * `Ok(String)` - Identifier of the logged-in user
    /// * `Err(AppError)` - On transport failure, non-success status or a payload
    ///   without `sessionID`/`userID`
    pub async fn login(&mut self, username: &str, password: &str) -> Result<String, AppError> {
        let params = Params::from([("username", username), ("password", password)]);

        debug!("Logging in as {}", username);
        let data = self
            .execute(PATH_LOGIN, Some(&params), &[], LogicalMethod::Get, None)
            .await?;
        let login: LoginResponse = from_data(data)?;

        let session = Session::from(login);
        let user_id = session.user_id.clone();
        self.session = Some(session);

        info!("Login successful, user: {}", user_id);
        Ok(user_id)
    }

    /// Logs out
    ///
    /// The local session is dropped whatever the outcome of the server call, so a
    /// failed logout may leave the server-side session alive. The call's error is
    /// still returned.
    pub async fn logout(&mut self) -> Result<(), AppError> {
        let result = self
            .request(PATH_LOGOUT, None, &[], LogicalMethod::Get)
            .await;

        if let Some(session) = self.session.take() {
            info!("Logged out user {}", session.user_id);
        }
        result.map(|_| ())
    }

    /// Searches objects and deserializes the results into `T`
    pub async fn search_as<T: DeserializeOwned>(
        &self,
        obj_code: &ObjCode,
        query: &Params,
        fields: &[&str],
    ) -> Result<Vec<T>, AppError> {
        let path = format!("/{obj_code}{PATH_SEARCH}");
        let data = self
            .request(&path, Some(query), fields, LogicalMethod::Get)
            .await?;
        from_data(data)
    }

    /// Gets a single object and deserializes it into `T`
    pub async fn retrieve_as<T: DeserializeOwned>(
        &self,
        obj_code: &ObjCode,
        id: &str,
        fields: &[&str],
    ) -> Result<T, AppError> {
        let path = format!("/{obj_code}/{id}");
        let data = self.request(&path, None, fields, LogicalMethod::Get).await?;
        from_data(data)
    }

    /// Issues a call with the current session
    async fn request(
        &self,
        path: &str,
        params: Option<&Params>,
        fields: &[&str],
        method: LogicalMethod,
    ) -> Result<Value, AppError> {
        self.execute(path, params, fields, method, self.session_id())
            .await
    }

    /// Builds the form, posts it and unwraps the `data` envelope
    async fn execute(
        &self,
        path: &str,
        params: Option<&Params>,
        fields: &[&str],
        method: LogicalMethod,
        session_id: Option<&str>,
    ) -> Result<Value, AppError> {
        let url = format!("{}{}", self.base_url, path);
        let form = build_form(params, method, session_id, fields);

        let response = make_http_request(&self.http_client, &url, &form).await?;
        parse_response(response).await
    }
}

/// Unwraps a `data` payload that must be a list
fn into_list(data: Value) -> Result<Vec<Value>, AppError> {
    match data {
        Value::Array(items) => Ok(items),
        other => Err(AppError::Deserialization(format!(
            "expected a list, got {other}"
        ))),
    }
}

#[async_trait]
impl ObjectService for StreamClient {
    async fn search(
        &self,
        obj_code: &ObjCode,
        query: &Params,
        fields: &[&str],
    ) -> Result<Vec<Value>, AppError> {
        let path = format!("/{obj_code}{PATH_SEARCH}");
        info!("Searching {}", obj_code);
        let data = self
            .request(&path, Some(query), fields, LogicalMethod::Get)
            .await?;
        let items = into_list(data)?;
        debug!("Search on {} returned {} objects", obj_code, items.len());
        Ok(items)
    }

    async fn list_by_id(
        &self,
        obj_code: &ObjCode,
        ids: &[&str],
        fields: &[&str],
    ) -> Result<Vec<Value>, AppError> {
        let path = format!("/{obj_code}");
        let params = Params::new().with("id", ids.join(","));
        info!("Getting {} {} objects by id", ids.len(), obj_code);
        let data = self
            .request(&path, Some(&params), fields, LogicalMethod::Get)
            .await?;
        into_list(data)
    }

    async fn create(
        &self,
        obj_code: &ObjCode,
        attributes: &Params,
        fields: &[&str],
    ) -> Result<Value, AppError> {
        let path = format!("/{obj_code}");
        info!("Creating {}", obj_code);
        self.request(&path, Some(attributes), fields, LogicalMethod::Post)
            .await
    }

    async fn update(
        &self,
        obj_code: &ObjCode,
        id: &str,
        attributes: &Params,
        fields: &[&str],
    ) -> Result<Value, AppError> {
        let path = format!("/{obj_code}/{id}");
        info!("Updating {} {}", obj_code, id);
        self.request(&path, Some(attributes), fields, LogicalMethod::Put)
            .await
    }

    async fn retrieve(
        &self,
        obj_code: &ObjCode,
        id: &str,
        fields: &[&str],
    ) -> Result<Value, AppError> {
        let path = format!("/{obj_code}/{id}");
        debug!("Getting {} {}", obj_code, id);
        self.request(&path, None, fields, LogicalMethod::Get).await
    }

    async fn delete(&self, obj_code: &ObjCode, id: &str, force: bool) -> Result<Value, AppError> {
        let path = format!("/{obj_code}/{id}");
        let params = Params::new().with("force", force);
        info!("Deleting {} {} (force={})", obj_code, id, force);
        self.request(&path, Some(&params), &[], LogicalMethod::Delete)
            .await
    }
}
