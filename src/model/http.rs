/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::RestApiConfig;
use crate::constants::{PARAM_METHOD, USER_AGENT};
use crate::error::AppError;
use crate::model::requests::Params;
use crate::model::responses::DataEnvelope;
use reqwest::redirect::Policy;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Builds the underlying HTTP client for a transport configuration
///
/// The timeout must be non-zero. Redirects are not followed, so a 3xx answer reaches the caller as is. Idle
/// connections are not kept, so every call opens its own connection.
pub fn build_http_client(rest_api: &RestApiConfig) -> Result<Client, AppError> {
    if rest_api.timeout == 0 {
        return Err(AppError::InvalidInput(
            "request timeout must be at least one second".to_string(),
        ));
    }
    if rest_api.accept_invalid_certs {
        warn!(
            "TLS certificate verification disabled for {}",
            rest_api.base_url
        );
    }

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(rest_api.timeout))
        .redirect(Policy::none())
        .pool_max_idle_per_host(0)
        .danger_accept_invalid_certs(rest_api.accept_invalid_certs)
        .build()?;
    Ok(client)
}

/// Sends a form-encoded request to the Stream API
///
/// The physical verb is always `POST`; the logical method travels inside `form`.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `url` - Full URL to request
/// * `form` - Complete outgoing parameter set, reserved keys included
///
/// # Returns
///
/// * `Ok(Response)` - Response with a 2xx or 3xx status
/// * `Err(AppError)` - Transport failure, or [`AppError::Unexpected`] with the body
///
/// # Example
///
/// ```ignore
/// use stream_client::model::http::{build_http_client, make_http_request};
/// use stream_client::model::requests::{build_form, LogicalMethod};
///
/// let client = build_http_client(&RestApiConfig::new("http://localhost/attask/api"))?;
/// let form = build_form(None, LogicalMethod::Get, Some("abc"), &[]);
/// let response = make_http_request(&client, "http://localhost/attask/api/TASK/1", &form).await?;
/// ```
pub async fn make_http_request(
    client: &Client,
    url: &str,
    form: &Params,
) -> Result<Response, AppError> {
    debug!(
        "POST {} (method={})",
        url,
        form.get(PARAM_METHOD).unwrap_or_default()
    );

    let response = client.post(url).form(form).send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() || status.is_redirection() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_else(|e| {
        warn!("Failed to read body of {} response: {}", status, e);
        String::new()
    });
    error!("Request failed with status {}: {}", status, body);
    Err(AppError::Unexpected { status, body })
}

/// Reads a successful response and unwraps its `data` field
pub async fn parse_response(response: Response) -> Result<Value, AppError> {
    let body = response.text().await?;
    DataEnvelope::from_body(&body).inspect_err(|e| {
        error!("Malformed response body ({}): {}", e, body);
    })
}
